//! Target sighting classification and the blocking scan gate.
//!
//! The first mission phase polls a [`TargetSampler`] until it reports a
//! definite sighting or the scan deadline passes. The winning sighting is
//! latched into the mission context and steers every later branch decision.

use crate::traits::TimeSource;

/// Classifier verdict for the scanned target position.
///
/// `Unknown` doubles as the timeout fallback: a mission that never sees the
/// target runs the same route as a center sighting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TargetSighting {
    #[default]
    Unknown,
    Left,
    Center,
    Right,
}

impl TargetSighting {
    /// Returns the sighting name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            TargetSighting::Unknown => "unknown",
            TargetSighting::Left => "left",
            TargetSighting::Center => "center",
            TargetSighting::Right => "right",
        }
    }
}

impl core::fmt::Display for TargetSighting {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Source of classifier verdicts, polled by the scan gate.
///
/// Each `sample` call must consume source time (real or simulated). The gate
/// observes its deadline through the [`TimeSource`] between samples, so a
/// sampler that returns `Unknown` forever without moving the clock would
/// never let the gate expire.
pub trait TargetSampler {
    /// Takes one classifier sample.
    fn sample(&mut self) -> TargetSighting;
}

/// Outcome of one scan gate run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanStats {
    /// Number of classifier samples taken.
    pub samples: u32,
    /// Wall time the gate held the mission, in milliseconds.
    pub elapsed_ms: u64,
    /// True when the deadline passed without a definite sighting.
    pub timed_out: bool,
}

/// Blocking scan gate with a deadline.
///
/// Polls the sampler until it reports anything other than `Unknown` or the
/// timeout elapses. At least one sample is always taken, so a zero timeout
/// still yields one classifier verdict.
#[derive(Debug)]
pub struct PerceptionGate {
    timeout_ms: u64,
    last_scan: Option<ScanStats>,
}

impl PerceptionGate {
    /// Creates a gate that gives up after `timeout_ms`.
    pub const fn new(timeout_ms: u64) -> Self {
        Self {
            timeout_ms,
            last_scan: None,
        }
    }

    /// Returns the configured deadline in milliseconds.
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Returns stats from the most recent run, if any.
    pub fn last_scan(&self) -> Option<ScanStats> {
        self.last_scan
    }

    /// Runs the gate to completion and returns the final sighting.
    ///
    /// Returns `Unknown` when the deadline passes first. Stats for the run
    /// are retained and readable via [`last_scan`](Self::last_scan).
    pub fn run<T: TimeSource>(
        &mut self,
        sampler: &mut dyn TargetSampler,
        time: &T,
    ) -> TargetSighting {
        let start_ms = time.now_ms();
        let mut samples: u32 = 0;

        let sighting = loop {
            let verdict = sampler.sample();
            samples = samples.wrapping_add(1);
            if verdict != TargetSighting::Unknown {
                break verdict;
            }
            if time.now_ms().saturating_sub(start_ms) >= self.timeout_ms {
                break verdict;
            }
        };

        self.last_scan = Some(ScanStats {
            samples,
            elapsed_ms: time.now_ms().saturating_sub(start_ms),
            timed_out: sighting == TargetSighting::Unknown,
        });
        sighting
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
