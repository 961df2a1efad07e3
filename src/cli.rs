// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::config::SessionConfig;

#[derive(Parser, Debug, Clone)]
#[command(name = "sparty-session")]
#[command(about = "Headless platformer session runner", long_about = None)]
pub struct Cli {
    /// Level to start in (defaults to $SPARTY_LEVEL, then "level1")
    #[arg(long)]
    pub level: Option<String>,

    /// Gameplay script to run, the built-in demo script when omitted
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// JSON save file; progress is kept in memory only when omitted
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// JSON session config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Level to load after a level is completed
    #[arg(long)]
    pub victory_level: Option<String>,

    /// Level to load when the last life is lost
    #[arg(long)]
    pub game_over_level: Option<String>,

    /// Lives for a fresh save
    #[arg(long)]
    pub start_lives: Option<i32>,

    /// Simulated frames per second
    #[arg(long, default_value = "60")]
    pub fps: f32,

    /// Number of extra-life indicators on the HUD
    #[arg(long, default_value = "5")]
    pub life_indicators: usize,

    /// Number of power indicators on the HUD
    #[arg(long, default_value = "10")]
    pub power_indicators: usize,

    /// Stop after this many level transitions
    #[arg(long, default_value = "8")]
    pub max_levels: usize,

    /// Disable HUD console output
    #[arg(long = "no-hud", default_value = "false")]
    pub no_hud: bool,
}

impl Cli {
    pub fn start_level(&self) -> String {
        self.level
            .clone()
            .or_else(|| std::env::var("SPARTY_LEVEL").ok())
            .unwrap_or_else(|| "level1".to_string())
    }

    /// Command-line values win over the config file
    pub fn apply_overrides(&self, mut config: SessionConfig) -> SessionConfig {
        if let Some(level) = &self.victory_level {
            config.level_after_victory = level.clone();
        }
        if let Some(level) = &self.game_over_level {
            config.level_after_game_over = level.clone();
        }
        if let Some(lives) = self.start_lives {
            config.start_lives = lives;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_config_values() {
        let cli = Cli::parse_from([
            "sparty-session",
            "--victory-level",
            "level2",
            "--start-lives",
            "5",
        ]);
        let config = cli.apply_overrides(SessionConfig::default().with_game_over_level("menu"));

        assert_eq!(config.level_after_victory, "level2");
        assert_eq!(config.level_after_game_over, "menu");
        assert_eq!(config.start_lives, 5);
    }

    #[test]
    fn explicit_level_wins() {
        let cli = Cli::parse_from(["sparty-session", "--level", "castle"]);
        assert_eq!(cli.start_level(), "castle");
        assert_eq!(cli.fps, 60.0);
        assert!(!cli.no_hud);
    }
}
