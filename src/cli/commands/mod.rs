//! Subcommand implementations

pub mod analyze;
pub mod bench;
pub mod best;
pub mod play;
