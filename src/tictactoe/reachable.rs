//! Enumeration of positions reachable from the empty board

use std::collections::HashSet;

use super::board::{Board, Player};

/// Counts over a set of positions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionCounts {
    pub total: usize,
    pub terminal: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl PositionCounts {
    pub fn of(boards: &[Board]) -> Self {
        let mut counts = PositionCounts {
            total: boards.len(),
            ..PositionCounts::default()
        };
        for board in boards.iter().filter(|b| b.is_terminal()) {
            counts.terminal += 1;
            match board.winner() {
                Some(Player::X) => counts.x_wins += 1,
                Some(Player::O) => counts.o_wins += 1,
                None => counts.draws += 1,
            }
        }
        counts
    }
}

/// Every distinct board reachable from the empty grid by legal play, X first.
///
/// Play stops at terminal boards. Boards are returned in discovery order,
/// starting with the empty board.
pub fn reachable_boards(human: Player) -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut order = Vec::new();
    let mut stack = vec![Board::initial(human)];

    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        order.push(board);
        stack.extend(board.children());
    }

    order
}
