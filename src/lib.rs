//! Perfect-play noughts and crosses
//!
//! This crate provides:
//! - An immutable board value with move validation and win detection
//! - Alpha-beta search for the computer's reply, with an unpruned minimax to
//!   check it against
//! - Interactive sessions that alternate sides between games
//! - A match runner that pits move selectors against each other
//! - The `noughts` command-line tool built on the above

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod ports;
pub mod search;
pub mod tictactoe;

pub use config::{Config, DrawScore, MatchConfig, SearchConfig, SessionConfig};
pub use error::{Error, MoveRejection, Result};
pub use search::{Score, SearchOutcome, Searcher, apply_move, best_move, initial_board};
pub use tictactoe::{Board, Cell, GameOutcome, Player, Session};
