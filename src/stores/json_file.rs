use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::SavedProgress;
use crate::traits::SessionStore;

/// Store backed by a JSON file, survives process restarts.
///
/// Every mutation is written through. Write failures are logged and the
/// in-memory copy stays authoritative for the rest of the run.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    progress: SavedProgress,
}

impl JsonFileStore {
    /// Open an existing save file, or start empty if there is none yet
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let progress = if path.exists() {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read save file {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Corrupt save file {}", path.display()))?
        } else {
            log::info!("No save file at {}, starting fresh", path.display());
            SavedProgress::default()
        };

        Ok(Self { path, progress })
    }

    /// Write the current progress to disk
    pub fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&self.progress)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write save file {}", self.path.display()))?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn progress(&self) -> &SavedProgress {
        &self.progress
    }

    fn write_through(&self) {
        if let Err(e) = self.flush() {
            log::error!("{e:#}");
        }
    }
}

impl SessionStore for JsonFileStore {
    fn lives(&self) -> i32 {
        self.progress.lives
    }

    fn score(&self) -> u32 {
        self.progress.score
    }

    fn highscore(&self) -> u32 {
        self.progress.highscore
    }

    fn reset_state(&mut self, start_lives: i32, reset_highscore: bool) {
        self.progress.reset(start_lives, reset_highscore);
        self.write_through();
    }

    fn save_state(&mut self, score: u32, highscore: u32, lives: i32) {
        self.progress.record(score, highscore, lives);
        self.write_through();
    }

    fn unlock_level(&mut self, level: &str) {
        if self.progress.unlocked_levels.insert(level.to_string()) {
            self.write_through();
        }
    }

    fn is_level_unlocked(&self, level: &str) -> bool {
        self.progress.unlocked_levels.contains(level)
    }
}
