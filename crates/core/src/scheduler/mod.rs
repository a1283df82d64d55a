//! Tick task types and statistics for mission loop housekeeping
//!
//! This module provides core types for per-tick side tasks without any
//! runtime dependencies. The actual task execution is handled by the
//! platform layer that owns the mission loop.
//!
//! # Components
//!
//! - [`TickTask`]: trait implemented by housekeeping tasks
//! - [`TaskSlot`]: where in the tick a task runs relative to the sequencer
//! - [`stats`]: execution statistics and budget tracking
//!
//! # Example
//!
//! ```rust
//! use depot_core::scheduler::TickTask;
//!
//! struct LoopCounter {
//!     ticks: u32,
//! }
//!
//! impl TickTask for LoopCounter {
//!     fn name(&self) -> &'static str {
//!         "loop_counter"
//!     }
//!
//!     fn run(&mut self, _now_us: u64) {
//!         self.ticks += 1;
//!     }
//! }
//! ```

pub mod stats;

pub use stats::TaskStats;

/// Position of a task within one mission loop tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskSlot {
    /// Runs before the sequencer tick, e.g. sensor refresh.
    PreMission,
    /// Runs after the sequencer tick, e.g. telemetry and logging.
    PostMission,
}

/// Housekeeping task invoked once per mission loop tick.
///
/// Tasks must return promptly. Execution time is measured against
/// [`budget_us`](Self::budget_us) and overruns are counted in the task's
/// [`TaskStats`].
pub trait TickTask {
    /// Human-readable task name for logging and stats.
    fn name(&self) -> &'static str;

    /// Execution time budget in microseconds.
    fn budget_us(&self) -> u32 {
        2_000
    }

    /// Runs the task. `now_us` is the mission clock, not wall time.
    fn run(&mut self, now_us: u64);
}
