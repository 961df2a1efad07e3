use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::types::DEFAULT_START_LIVES;

/// Level routing and starting values for a session.
///
/// Empty level names are filled in with the current level when the session
/// starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub level_after_victory: String,
    pub level_after_game_over: String,
    pub start_lives: i32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            level_after_victory: String::new(),
            level_after_game_over: String::new(),
            start_lives: DEFAULT_START_LIVES,
        }
    }
}

impl SessionConfig {
    /// Read a JSON config file, missing keys take their defaults
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        Ok(config)
    }

    pub fn with_victory_level(mut self, level: impl Into<String>) -> Self {
        self.level_after_victory = level.into();
        self
    }

    pub fn with_game_over_level(mut self, level: impl Into<String>) -> Self {
        self.level_after_game_over = level.into();
        self
    }

    pub fn with_start_lives(mut self, lives: i32) -> Self {
        self.start_lives = lives;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_three_lives_and_no_levels() {
        let config = SessionConfig::default();
        assert_eq!(config.start_lives, 3);
        assert!(config.level_after_victory.is_empty());
        assert!(config.level_after_game_over.is_empty());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SessionConfig::from_json(r#"{ "level_after_victory": "level2" }"#).unwrap();
        assert_eq!(config.level_after_victory, "level2");
        assert_eq!(config.start_lives, 3);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(SessionConfig::from_json("{ start_lives: ").is_err());
    }

    #[test]
    fn builders_override_fields() {
        let config = SessionConfig::default()
            .with_victory_level("win")
            .with_game_over_level("lose")
            .with_start_lives(5);
        assert_eq!(config.level_after_victory, "win");
        assert_eq!(config.level_after_game_over, "lose");
        assert_eq!(config.start_lives, 5);
    }
}
