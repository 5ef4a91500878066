//! Adversarial search over tic-tac-toe positions
//!
//! Scores are always from the perspective "X maximizes, O minimizes".
//! [`Searcher::search`] is a plain alpha-beta minimax that explores the whole
//! remaining tree from the given board; [`Searcher::minimax`] is the same search
//! without pruning and exists to check that pruning never changes a value.

pub mod alphabeta;
pub mod evaluate;
pub mod minimax;

use crate::{
    Result,
    config::SearchConfig,
    tictactoe::{Board, Player},
};

pub use alphabeta::SearchOutcome;
pub use minimax::tree_size;

/// Minimax value of a position
pub type Score = f64;

/// Value of a position X has won
pub const X_WIN: Score = 1.0;
/// Value of a position O has won
pub const O_WIN: Score = -1.0;
/// Magnitude of the draw score under [`DrawScore::HumanBiased`](crate::config::DrawScore)
pub const DRAW_BIAS: Score = 1.5;
/// Lower bound below every reachable score; the root alpha
pub const SCORE_FLOOR: Score = -2.0;
/// Upper bound above every reachable score; the root beta
pub const SCORE_CEILING: Score = 2.0;

/// Stateless search engine. Cheap to copy and safe to share between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Searcher {
    config: SearchConfig,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

/// Empty starting position, X to move
pub fn initial_board(human: Player) -> Board {
    Board::initial(human)
}

/// Fill `cell` for the side to move; see [`Board::apply_move`]
pub fn apply_move(board: &Board, cell: usize) -> Result<Board> {
    board.apply_move(cell)
}

/// Computer reply using the default configuration; see [`Searcher::best_move`]
pub fn best_move(board: &Board) -> Result<Board> {
    Searcher::default().best_move(board)
}
