/// Scaled game time. A scale of 0 freezes everything keyed off it.
///
/// Time is accumulated in `f64` so per-frame `f32` deltas do not drift
/// across long sessions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameClock {
    time: f64,
    time_scale: f64,
}

impl GameClock {
    pub fn new() -> Self {
        Self {
            time: 0.0,
            time_scale: 1.0,
        }
    }

    /// Advance by a real delta, returns the scaled delta actually applied
    pub fn advance(&mut self, real_delta: f32) -> f64 {
        let scaled = f64::from(real_delta.max(0.0)) * self.time_scale;
        self.time += scaled;
        scaled
    }

    /// Game seconds since the session started
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn set_time_scale(&mut self, scale: f64) {
        self.time_scale = scale.max(0.0);
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new()
    }
}
