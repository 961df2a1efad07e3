use glam::Vec3;

/// Lives can never be topped up past this
pub const MAX_LIVES: i32 = 10;

/// Default number of lives for a fresh save
pub const DEFAULT_START_LIVES: i32 = 3;

/// Mutable state of one play session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub score: u32,
    pub highscore: u32,
    pub lives: i32,
    /// Where the player started, `None` when the scene has no player
    pub spawn_location: Option<Vec3>,
}

impl SessionState {
    pub fn new(start_lives: i32) -> Self {
        Self {
            score: 0,
            highscore: 0,
            lives: start_lives,
            spawn_location: None,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.lives <= 0
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(DEFAULT_START_LIVES)
    }
}

/// Whether game time is flowing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Running,
    Paused,
}

pub fn score_text(score: u32) -> String {
    format!("Score: {score}")
}

pub fn highscore_text(highscore: u32) -> String {
    format!("Highscore: {highscore}")
}
