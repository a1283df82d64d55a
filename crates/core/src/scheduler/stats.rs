//! Execution statistics for tick tasks

/// Runtime statistics for a single tick task
///
/// Updated after each task execution and queried for monitoring and for the
/// end-of-run report.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskStats {
    /// Last execution time in microseconds
    pub last_execution_us: u32,

    /// Average execution time in microseconds (exponential moving average)
    ///
    /// Uses EMA with alpha = 0.1 to smooth out variations while remaining
    /// responsive to changes in execution time.
    pub avg_execution_us: u32,

    /// Maximum execution time observed in microseconds
    pub max_execution_us: u32,

    /// Number of budget overruns (execution time > budget)
    pub deadline_misses: u32,

    /// Total number of executions
    pub execution_count: u64,
}

impl TaskStats {
    /// Update statistics with a new execution measurement
    ///
    /// # Arguments
    ///
    /// * `execution_us` - Duration of the task execution in microseconds
    /// * `budget_us` - Maximum allowed execution time
    pub fn update(&mut self, execution_us: u32, budget_us: u32) {
        self.last_execution_us = execution_us;
        self.execution_count = self.execution_count.saturating_add(1);

        // EMA formula: avg_new = alpha * value + (1 - alpha) * avg_old
        // Using fixed-point arithmetic: avg_new = (value + 9 * avg_old) / 10
        if self.avg_execution_us == 0 {
            self.avg_execution_us = execution_us;
        } else {
            self.avg_execution_us = (execution_us + 9 * self.avg_execution_us) / 10;
        }

        if execution_us > self.max_execution_us {
            self.max_execution_us = execution_us;
        }

        if execution_us > budget_us {
            self.deadline_misses = self.deadline_misses.saturating_add(1);
        }
    }

    /// Reset all statistics to initial state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_stats_update() {
        let mut stats = TaskStats::default();

        // First execution
        stats.update(1500, 2000);

        assert_eq!(stats.last_execution_us, 1500);
        assert_eq!(stats.avg_execution_us, 1500);
        assert_eq!(stats.max_execution_us, 1500);
        assert_eq!(stats.deadline_misses, 0);
        assert_eq!(stats.execution_count, 1);

        // Second execution - normal
        stats.update(1600, 2000);

        assert_eq!(stats.last_execution_us, 1600);
        assert_eq!(stats.avg_execution_us, (1600 + 9 * 1500) / 10); // EMA
        assert_eq!(stats.max_execution_us, 1600);
        assert_eq!(stats.deadline_misses, 0);
        assert_eq!(stats.execution_count, 2);

        // Third execution - budget overrun
        stats.update(2100, 2000);

        assert_eq!(stats.last_execution_us, 2100);
        assert_eq!(stats.max_execution_us, 2100);
        assert_eq!(stats.deadline_misses, 1);
        assert_eq!(stats.execution_count, 3);
    }

    #[test]
    fn test_task_stats_max_does_not_regress() {
        let mut stats = TaskStats::default();

        stats.update(1800, 2000);
        stats.update(300, 2000);

        assert_eq!(stats.max_execution_us, 1800);
        assert_eq!(stats.last_execution_us, 300);
    }

    #[test]
    fn test_task_stats_exact_budget_is_not_a_miss() {
        let mut stats = TaskStats::default();

        stats.update(2000, 2000);
        assert_eq!(stats.deadline_misses, 0);

        stats.update(2001, 2000);
        assert_eq!(stats.deadline_misses, 1);
    }

    #[test]
    fn test_task_stats_reset() {
        let mut stats = TaskStats::default();
        stats.update(1500, 2000);
        stats.update(2500, 2000);
        assert_eq!(stats.deadline_misses, 1);

        stats.reset();
        assert_eq!(stats.last_execution_us, 0);
        assert_eq!(stats.avg_execution_us, 0);
        assert_eq!(stats.max_execution_us, 0);
        assert_eq!(stats.deadline_misses, 0);
        assert_eq!(stats.execution_count, 0);
    }
}
