//! Scripted target classifier.
//!
//! Stands in for the camera pipeline during simulation. Each sample burns a
//! configurable slice of clock time, same as a real inference pass would,
//! and the script decides when the detector finally locks on.

use depot_core::perception::{TargetSampler, TargetSighting};

use crate::clock::SimClock;

/// How long one classifier pass takes by default, in microseconds.
const DEFAULT_SAMPLE_INTERVAL_US: u64 = 50_000;

/// Classifier that returns `Unknown` for a scripted number of samples and
/// the configured sighting afterwards.
///
/// Holds a clone of the simulation clock and advances it on every sample,
/// so the scan loop sees time passing and its deadline stays meaningful.
#[derive(Debug, Clone)]
pub struct ScriptedClassifier {
    clock: SimClock,
    sample_interval_us: u64,
    sighting: TargetSighting,
    detect_after: Option<u32>,
    taken: u32,
}

impl ScriptedClassifier {
    /// Classifier that locks onto `sighting` once `after_samples` passes
    /// have come back empty.
    pub fn resolves(clock: SimClock, sighting: TargetSighting, after_samples: u32) -> Self {
        Self {
            clock,
            sample_interval_us: DEFAULT_SAMPLE_INTERVAL_US,
            sighting,
            detect_after: Some(after_samples),
            taken: 0,
        }
    }

    /// Classifier that never finds anything.
    pub fn blind(clock: SimClock) -> Self {
        Self {
            clock,
            sample_interval_us: DEFAULT_SAMPLE_INTERVAL_US,
            sighting: TargetSighting::Unknown,
            detect_after: None,
            taken: 0,
        }
    }

    /// Override the per-sample time cost.
    pub fn with_sample_interval_us(mut self, interval_us: u64) -> Self {
        self.sample_interval_us = interval_us;
        self
    }

    /// Samples taken so far.
    pub fn samples_taken(&self) -> u32 {
        self.taken
    }
}

impl TargetSampler for ScriptedClassifier {
    fn sample(&mut self) -> TargetSighting {
        self.clock.advance_us(self.sample_interval_us);
        self.taken = self.taken.wrapping_add(1);
        match self.detect_after {
            Some(after) if self.taken > after => self.sighting,
            _ => TargetSighting::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use depot_core::traits::TimeSource;

    #[test]
    fn test_resolves_after_scripted_samples() {
        let clock = SimClock::new(20_000);
        let mut classifier = ScriptedClassifier::resolves(clock, TargetSighting::Left, 2);

        assert_eq!(classifier.sample(), TargetSighting::Unknown);
        assert_eq!(classifier.sample(), TargetSighting::Unknown);
        assert_eq!(classifier.sample(), TargetSighting::Left);
        assert_eq!(classifier.sample(), TargetSighting::Left);
        assert_eq!(classifier.samples_taken(), 4);
    }

    #[test]
    fn test_immediate_detection() {
        let clock = SimClock::new(20_000);
        let mut classifier = ScriptedClassifier::resolves(clock, TargetSighting::Center, 0);
        assert_eq!(classifier.sample(), TargetSighting::Center);
    }

    #[test]
    fn test_blind_classifier_never_locks() {
        let clock = SimClock::new(20_000);
        let mut classifier = ScriptedClassifier::blind(clock);
        for _ in 0..50 {
            assert_eq!(classifier.sample(), TargetSighting::Unknown);
        }
    }

    #[test]
    fn test_each_sample_consumes_clock_time() {
        let clock = SimClock::new(20_000);
        let mut classifier =
            ScriptedClassifier::resolves(clock.clone(), TargetSighting::Right, 10)
                .with_sample_interval_us(25_000);

        classifier.sample();
        classifier.sample();
        assert_eq!(clock.now_us(), 50_000);
    }
}
