pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Everything a store keeps between sessions.
/// A default record has zero lives, which reads as "never saved".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavedProgress {
    pub lives: i32,
    pub score: u32,
    pub highscore: u32,
    pub unlocked_levels: BTreeSet<String>,
    /// RFC 3339 time of the last save
    pub saved_at: Option<String>,
}

impl SavedProgress {
    pub fn reset(&mut self, start_lives: i32, reset_highscore: bool) {
        self.lives = start_lives;
        self.score = 0;
        if reset_highscore {
            self.highscore = 0;
        }
    }

    pub fn record(&mut self, score: u32, highscore: u32, lives: i32) {
        self.score = score;
        self.highscore = highscore;
        self.lives = lives;
        self.saved_at = Some(chrono::Utc::now().to_rfc3339());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_keeps_highscore_unless_asked() {
        let mut progress = SavedProgress {
            lives: 1,
            score: 40,
            highscore: 90,
            ..Default::default()
        };

        progress.reset(3, false);
        assert_eq!((progress.lives, progress.score, progress.highscore), (3, 0, 90));

        progress.reset(5, true);
        assert_eq!((progress.lives, progress.score, progress.highscore), (5, 0, 0));
    }

    #[test]
    fn record_stamps_save_time() {
        let mut progress = SavedProgress::default();
        progress.record(10, 20, 2);
        assert_eq!((progress.score, progress.highscore, progress.lives), (10, 20, 2));
        let stamp = progress.saved_at.expect("timestamp");
        assert!(chrono::DateTime::parse_from_rfc3339(&stamp).is_ok());
    }
}
