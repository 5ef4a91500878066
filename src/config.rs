//! Configuration for search, interactive sessions and matches
//!
//! Every section has a usable `Default`, and a JSON file only needs to name
//! the fields it changes:
//!
//! ```json
//! { "search": { "draw_score": "neutral" }, "session": { "human": "O" } }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, tictactoe::Player};

/// How a drawn game is scored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DrawScore {
    /// `-1.5` when the human plays X, `+1.5` otherwise, favouring the computer
    #[default]
    HumanBiased,
    /// Draws score 0
    Neutral,
}

/// Search configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub draw_score: DrawScore,
}

impl SearchConfig {
    /// Configuration that scores draws as 0
    pub fn neutral() -> Self {
        Self {
            draw_score: DrawScore::Neutral,
        }
    }
}

/// Interactive session configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Side the human plays in the first game
    pub human: Player,

    /// Whether each restart hands the human the other side
    pub swap_on_restart: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            human: Player::X,
            swap_on_restart: true,
        }
    }
}

/// Match configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games
    pub games: usize,

    /// Random seed for reproducibility
    pub seed: Option<u64>,

    /// Side the evaluated selector plays in the first game
    pub subject: Player,

    /// Swap sides after every game
    pub alternate: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed: None,
            subject: Player::O,
            alternate: true,
        }
    }
}

/// Complete configuration file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub search: SearchConfig,
    pub session: SessionConfig,
    pub matches: MatchConfig,
}

impl Config {
    /// Load from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| Error::Io {
            operation: format!("open config {}", path.display()),
            source,
        })?;
        let config: Config = serde_json::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    /// Save as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|source| Error::Io {
            operation: format!("create config {}", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.matches.games == 0 {
            return Err(Error::InvalidConfiguration {
                message: "matches.games must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn default_sections() {
        let config = Config::default();
        assert_eq!(config.search.draw_score, DrawScore::HumanBiased);
        assert_eq!(config.session.human, Player::X);
        assert!(config.session.swap_on_restart);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "search": {{ "draw_score": "neutral" }}, "session": {{ "human": "O" }} }}"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.search, SearchConfig::neutral());
        assert_eq!(config.session.human, Player::O);
        assert!(config.session.swap_on_restart);
        assert_eq!(config.matches, MatchConfig::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("noughts.json");
        let config = Config {
            matches: MatchConfig {
                games: 12,
                seed: Some(7),
                ..MatchConfig::default()
            },
            ..Config::default()
        };

        config.save(&path).unwrap();
        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn zero_games_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "matches": {{ "games": 0 }} }}"#).unwrap();
        assert!(matches!(
            Config::load(file.path()),
            Err(Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Config::load("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("open config"), "got {err}");
    }
}
