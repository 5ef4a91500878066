//! Alpha-beta minimax

use tracing::debug;

use super::{SCORE_CEILING, SCORE_FLOOR, Score, Searcher};
use crate::{
    Error, Result,
    tictactoe::{Board, Player},
};

/// Result of searching one position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome {
    /// Minimax value of the searched board
    pub value: Score,
    /// Child chosen for the side to move; `None` for terminal boards
    pub best: Option<Board>,
    /// Positions visited, the root included
    pub nodes: usize,
}

impl Searcher {
    /// Alpha-beta search of `board` within the window `[alpha, beta]`.
    ///
    /// Children are tried in ascending cell order and the first child reaching
    /// the best value is kept, so ties go to the lowest cell.
    pub fn search(&self, board: &Board, alpha: Score, beta: Score) -> SearchOutcome {
        let mut nodes = 0;
        let (value, best) = self.alpha_beta(board, alpha, beta, &mut nodes);
        SearchOutcome { value, best, nodes }
    }

    /// Optimal reply for the side to move, searching the full window.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`] if the board is terminal.
    pub fn best_move(&self, board: &Board) -> Result<Board> {
        if board.is_terminal() {
            return Err(Error::GameOver);
        }

        let outcome = self.search(board, SCORE_FLOOR, SCORE_CEILING);
        let best = outcome
            .best
            .expect("non-terminal board always has at least one child");

        debug!(
            board = %board.encode(),
            value = outcome.value,
            cell = ?board.move_to(&best),
            nodes = outcome.nodes,
            "search complete"
        );
        Ok(best)
    }

    fn alpha_beta(
        &self,
        board: &Board,
        mut alpha: Score,
        mut beta: Score,
        nodes: &mut usize,
    ) -> (Score, Option<Board>) {
        *nodes += 1;
        if board.is_terminal() {
            return (self.evaluate(board), None);
        }

        let children = board.children();
        assert!(
            !children.is_empty(),
            "non-terminal board {} has no children",
            board.encode()
        );

        let mut best = None;
        match board.next_to_move() {
            Player::X => {
                let mut value = SCORE_FLOOR;
                for child in children {
                    let (child_value, _) = self.alpha_beta(&child, alpha, beta, nodes);
                    if child_value > value {
                        value = child_value;
                        best = Some(child);
                    }
                    alpha = alpha.max(value);
                    if alpha >= beta {
                        break;
                    }
                }
                (value, best)
            }
            Player::O => {
                let mut value = SCORE_CEILING;
                for child in children {
                    let (child_value, _) = self.alpha_beta(&child, alpha, beta, nodes);
                    if child_value < value {
                        value = child_value;
                        best = Some(child);
                    }
                    beta = beta.min(value);
                    if alpha >= beta {
                        break;
                    }
                }
                (value, best)
            }
        }
    }
}
