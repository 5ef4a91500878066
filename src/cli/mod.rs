//! Terminal front end: play against the search, query positions, run
//! analyses and benchmark matches.

pub mod commands;
pub mod output;

use std::path::Path;

use anyhow::{Context, Result};

use crate::{config::Config, tictactoe::Player};

/// Load the configuration file if one was given, defaults otherwise
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading configuration from {}", path.display())),
        None => Ok(Config::default()),
    }
}

/// Parse an `x`/`o` command-line value
pub fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    Player::parse(value).with_context(|| format!("invalid value for {flag}"))
}
