//! Shared helpers for the integration tests.

#![allow(dead_code)]

use noughts::{
    Board, Player, SearchConfig, Searcher,
    search::{SCORE_CEILING, SCORE_FLOOR},
    tictactoe::reachable_boards,
};

/// Every position reachable from the empty board, scored for `human`
pub fn reachable(human: Player) -> Vec<Board> {
    reachable_boards(human)
}

/// Parse a board, panicking on malformed test input
pub fn board(s: &str, human: Player) -> Board {
    Board::from_string(s, human).unwrap_or_else(|err| panic!("bad test board {s}: {err}"))
}

/// Whether X can force a win from `board` against any defence.
///
/// Uses neutral draw scoring, so the value is `+1` exactly when X wins with
/// best play from both sides.
pub fn x_can_force_win(board: &Board) -> bool {
    Searcher::new(SearchConfig::neutral()).minimax(board) == 1.0
}

/// Cell the searcher picks on `board`
pub fn chosen_cell(searcher: &Searcher, board: &Board) -> usize {
    let child = searcher.best_move(board).expect("board should not be terminal");
    board.move_to(&child).expect("reply should be a child")
}

/// Full-window alpha-beta value
pub fn pruned_value(searcher: &Searcher, board: &Board) -> f64 {
    searcher.search(board, SCORE_FLOOR, SCORE_CEILING).value
}
