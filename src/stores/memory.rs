use super::SavedProgress;
use crate::traits::SessionStore;

/// Store that lives only as long as the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    progress: SavedProgress,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_progress(progress: SavedProgress) -> Self {
        Self { progress }
    }

    pub fn progress(&self) -> &SavedProgress {
        &self.progress
    }
}

impl SessionStore for MemoryStore {
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
    }

    fn save_state(&mut self, score: u32, highscore: u32, lives: i32) {
        self.progress.record(score, highscore, lives);
    }

    fn unlock_level(&mut self, level: &str) {
        self.progress.unlocked_levels.insert(level.to_string());
    }

    fn is_level_unlocked(&self, level: &str) -> bool {
        self.progress.unlocked_levels.contains(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_store_reports_no_lives() {
        let store = MemoryStore::new();
        assert_eq!(store.lives(), 0);
        assert_eq!(store.score(), 0);
        assert!(!store.is_level_unlocked("level1"));
    }

    #[test]
    fn unlock_is_idempotent() {
        let mut store = MemoryStore::new();
        store.unlock_level("level1");
        store.unlock_level("level1");
        assert!(store.is_level_unlocked("level1"));
        assert_eq!(store.progress().unlocked_levels.len(), 1);
    }
}
