//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod lines;
pub mod reachable;

pub use board::{Board, Cell, Player};
pub use game::{Exchange, GameOutcome, Move, Session, Verdict};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use reachable::{PositionCounts, reachable_boards};
