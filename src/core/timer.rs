/// Countdown timer - fires once after duration
/// Accumulates whatever delta it is given, so feeding it scaled game time
/// makes it stop while the game is paused.
#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    duration: f64,
    elapsed: f64,
    active: bool,
}

impl Countdown {
    /// Create countdown that is already running
    pub fn started(duration: f64) -> Self {
        Self {
            duration,
            elapsed: 0.0,
            active: true,
        }
    }

    /// Tick with delta, returns true if completed
    pub fn tick(&mut self, delta: f64) -> bool {
        if !self.active {
            return false;
        }

        self.elapsed += delta;

        if self.elapsed >= self.duration {
            self.active = false;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_fires_once() {
        let mut timer = Countdown::started(1.0);

        assert!(!timer.tick(0.5)); // In progress
        assert!(timer.tick(0.6)); // Complete
        assert!(!timer.tick(0.1)); // Inactive again
    }

    #[test]
    fn zero_deltas_hold_the_countdown() {
        let mut timer = Countdown::started(3.5);
        for _ in 0..100 {
            assert!(!timer.tick(0.0));
        }
        assert!(timer.tick(3.5));
    }
}
