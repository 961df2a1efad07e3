/// Power meter - recharges one unit every `POWER_RECHARGE_SECONDS` of game time
/// and is spent all at once.

pub const MAX_POWER: u8 = 10;
pub const POWER_RECHARGE_SECONDS: f64 = 3.0;

/// Power level after `elapsed` game seconds since the last use
pub fn compute_power_level(elapsed: f64) -> u8 {
    if elapsed.is_nan() || elapsed <= 0.0 {
        return 0;
    }
    let units = (elapsed / POWER_RECHARGE_SECONDS).floor();
    units.min(f64::from(MAX_POWER)) as u8
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerMeter {
    level: u8,
    last_used: f64,
}

impl PowerMeter {
    pub fn new() -> Self {
        Self {
            level: 0,
            last_used: 0.0,
        }
    }

    /// Recompute the level from the current game time
    pub fn recharge(&mut self, now: f64) -> u8 {
        self.level = compute_power_level(now - self.last_used);
        self.level
    }

    /// Spend a full meter. Returns false and changes nothing when not full.
    pub fn try_consume(&mut self, now: f64) -> bool {
        if !self.is_full() {
            return false;
        }
        self.level = 0;
        self.last_used = now;
        true
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn last_used(&self) -> f64 {
        self.last_used
    }

    pub fn is_full(&self) -> bool {
        self.level >= MAX_POWER
    }
}

impl Default for PowerMeter {
    fn default() -> Self {
        Self::new()
    }
}
