//! Lockstep simulation clock.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use depot_core::traits::TimeSource;

/// Shared lockstep clock for the simulated mission loop.
///
/// Clones share the same underlying instant, so the classifier consumes scan
/// time on the same clock the sequencer reads its deadline from. Time only
/// moves when a component advances it; nothing in the sim waits on wall time.
#[derive(Debug, Clone)]
pub struct SimClock {
    now_us: Arc<AtomicU64>,
    step_us: u64,
}

impl SimClock {
    /// Creates a clock at time zero with the given tick step.
    pub fn new(step_us: u64) -> Self {
        Self {
            now_us: Arc::new(AtomicU64::new(0)),
            step_us,
        }
    }

    /// Advances the clock by one tick period.
    pub fn tick(&self) {
        self.now_us.fetch_add(self.step_us, Ordering::Relaxed);
    }

    /// Advances the clock by an arbitrary amount.
    pub fn advance_us(&self, us: u64) {
        self.now_us.fetch_add(us, Ordering::Relaxed);
    }

    /// Returns the configured tick step in microseconds.
    pub fn step_us(&self) -> u64 {
        self.step_us
    }
}

impl TimeSource for SimClock {
    fn now_ms(&self) -> u64 {
        self.now_us() / 1000
    }

    fn now_us(&self) -> u64 {
        self.now_us.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_advances_by_step() {
        let clock = SimClock::new(20_000);
        assert_eq!(clock.now_us(), 0);

        clock.tick();
        assert_eq!(clock.now_us(), 20_000);
        assert_eq!(clock.now_ms(), 20);

        clock.tick();
        assert_eq!(clock.now_us(), 40_000);
    }

    #[test]
    fn test_clones_share_time() {
        let clock = SimClock::new(10_000);
        let observer = clock.clone();

        clock.advance_us(123_456);
        assert_eq!(observer.now_us(), 123_456);

        observer.tick();
        assert_eq!(clock.now_us(), 133_456);
    }

    #[test]
    fn test_elapsed_since_uses_shared_instant() {
        let clock = SimClock::new(10_000);
        let start = clock.now_us();

        clock.advance_us(5_000);
        assert_eq!(clock.elapsed_since(start), 5_000);
    }
}
