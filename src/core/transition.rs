use super::timer::Countdown;

/// Game seconds between finishing a level and loading the next one
pub const VICTORY_DELAY_SECONDS: f64 = 3.5;

/// Identifies a scheduled level transition so it can be cancelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionHandle(u64);

#[derive(Debug, Clone)]
struct PendingTransition {
    handle: TransitionHandle,
    target: String,
    countdown: Countdown,
}

/// Level loads waiting on a game-time delay
#[derive(Debug, Clone, Default)]
pub struct TransitionScheduler {
    pending: Vec<PendingTransition>,
    next_id: u64,
}

impl TransitionScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a load of `target` after `delay` game seconds
    pub fn schedule(&mut self, target: &str, delay: f64) -> TransitionHandle {
        let handle = TransitionHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(PendingTransition {
            handle,
            target: target.to_string(),
            countdown: Countdown::started(delay),
        });
        handle
    }

    /// Drop a pending transition. False if it already fired or never existed.
    pub fn cancel(&mut self, handle: TransitionHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.handle != handle);
        self.pending.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    /// Advance every pending transition, returns the targets that came due in scheduling order
    pub fn tick(&mut self, delta: f64) -> Vec<String> {
        let mut due = Vec::new();
        self.pending.retain_mut(|p| {
            if p.countdown.tick(delta) {
                due.push(std::mem::take(&mut p.target));
                false
            } else {
                true
            }
        });
        due
    }

    pub fn is_pending(&self, handle: TransitionHandle) -> bool {
        self.pending.iter().any(|p| p.handle == handle)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_after_delay_and_only_once() {
        let mut scheduler = TransitionScheduler::new();
        let handle = scheduler.schedule("level2", VICTORY_DELAY_SECONDS);

        assert!(scheduler.tick(3.0).is_empty());
        assert!(scheduler.is_pending(handle));

        assert_eq!(scheduler.tick(0.5), vec!["level2".to_string()]);
        assert!(!scheduler.is_pending(handle));
        assert!(scheduler.tick(10.0).is_empty());
    }

    #[test]
    fn cancel_prevents_firing() {
        let mut scheduler = TransitionScheduler::new();
        let handle = scheduler.schedule("level2", 1.0);

        assert!(scheduler.cancel(handle));
        assert!(!scheduler.cancel(handle));
        assert!(scheduler.tick(5.0).is_empty());
    }

    #[test]
    fn handles_are_distinct() {
        let mut scheduler = TransitionScheduler::new();
        let a = scheduler.schedule("a", 1.0);
        let b = scheduler.schedule("b", 2.0);
        assert_ne!(a, b);
        assert_eq!(scheduler.pending_count(), 2);

        scheduler.cancel(a);
        assert!(scheduler.tick(1.0).is_empty());
        assert_eq!(scheduler.tick(1.0), vec!["b".to_string()]);
    }
}
