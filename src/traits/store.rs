/// Persistent progress shared across sessions and levels.
///
/// `lives() <= 0` means nothing has been saved yet.
pub trait SessionStore {
    fn lives(&self) -> i32;

    fn score(&self) -> u32;

    fn highscore(&self) -> u32;

    /// Start over with `start_lives` and a zero score
    fn reset_state(&mut self, start_lives: i32, reset_highscore: bool);

    fn save_state(&mut self, score: u32, highscore: u32, lives: i32);

    /// Record that `level` has been reached so menus can offer it
    fn unlock_level(&mut self, level: &str);

    fn is_level_unlocked(&self, level: &str) -> bool;
}
