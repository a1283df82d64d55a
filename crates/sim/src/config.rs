//! Simulation rig configuration.

/// Configuration for the simulated robot and the mission loop.
///
/// Defaults are tuned so every route leg finishes inside its deadline. Slow
/// the rates down to exercise the timeout clamping paths.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Mission loop period in microseconds.
    pub tick_period_us: u64,
    /// Straight-line drive rate in inches per second.
    pub drive_rate_ips: f32,
    /// Turn rate in degrees per second.
    pub turn_rate_dps: f32,
    /// Time for the lift to lower in seconds.
    pub lift_time_s: f32,
    /// Time for the holder servo to open in seconds.
    pub holder_time_s: f32,
    /// Time for a dropper swing (either direction) in seconds.
    pub dropper_time_s: f32,
    /// Fractional jitter applied to actuation times (0.0 = none).
    pub actuation_jitter: f32,
    /// RNG seed for deterministic runs. None = random.
    pub seed: Option<u64>,
    /// Tick budget before a run is abandoned.
    pub max_ticks: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_period_us: 20_000, // 50 Hz
            drive_rate_ips: 30.0,
            turn_rate_dps: 120.0,
            lift_time_s: 3.0,
            holder_time_s: 0.4,
            dropper_time_s: 0.5,
            actuation_jitter: 0.0,
            seed: None,
            max_ticks: 20_000,
        }
    }
}
