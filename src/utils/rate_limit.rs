//! Rate limiting for DOM event handlers.
//!
//! Scroll and click handlers share these small stateful objects instead of
//! closing over free timer variables, so callers can reset or cancel the
//! pending state explicitly.

use instant::{Duration, Instant};

/// Admits at most one call per window. The caller checks [`Throttle::ready`]
/// inside its event handler and skips the work when it returns false.
#[derive(Debug)]
pub struct Throttle {
    window: Duration,
    last: Option<Instant>,
}

impl Throttle {
    pub fn new(window: Duration) -> Self {
        Self { window, last: None }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// True at most once per window; records the admission time.
    pub fn ready(&mut self) -> bool {
        self.ready_at(Instant::now())
    }

    fn ready_at(&mut self, now: Instant) -> bool {
        match self.last {
            Some(last) if now.duration_since(last) < self.window => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }

    /// Forget the last admission so the next call passes immediately.
    #[allow(dead_code)]
    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Generation counter for deferred actions. Each [`Debounce::arm`] call
/// invalidates every outstanding timer: a timer that wakes up and finds its
/// generation stale does nothing, which makes the last-writer-wins race of
/// repeated clicks explicit instead of accidental.
#[derive(Debug, Default)]
pub struct Debounce {
    generation: u64,
}

impl Debounce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new deferred action, superseding any pending one.
    pub fn arm(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Invalidate all outstanding generations without starting a new one.
    #[allow(dead_code)]
    pub fn cancel(&mut self) {
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn throttle_admits_once_per_window() {
        let mut throttle = Throttle::from_millis(100);
        let start = Instant::now();

        assert!(throttle.ready_at(start));
        assert!(!throttle.ready_at(start + Duration::from_millis(50)));
        assert!(!throttle.ready_at(start + Duration::from_millis(99)));
        assert!(throttle.ready_at(start + Duration::from_millis(100)));
    }

    #[test]
    fn throttle_reset_rearms() {
        let mut throttle = Throttle::from_millis(100);
        let start = Instant::now();

        assert!(throttle.ready_at(start));
        throttle.reset();
        assert!(throttle.ready_at(start + Duration::from_millis(1)));
    }

    #[test]
    fn debounce_supersedes_older_generations() {
        let mut debounce = Debounce::new();

        let first = debounce.arm();
        let second = debounce.arm();

        assert!(!debounce.is_current(first));
        assert!(debounce.is_current(second));
    }

    #[test]
    fn debounce_cancel_invalidates_all() {
        let mut debounce = Debounce::new();

        let pending = debounce.arm();
        debounce.cancel();

        assert!(!debounce.is_current(pending));
    }
}
