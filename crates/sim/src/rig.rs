//! Simulated depot robot.
//!
//! Built-in actuation model with no external dependencies, suitable for CI
//! testing and rapid iteration. Commands finish after a duration derived
//! from the configured rates, clamped to the command deadline, and fire
//! their completion token against the sequencer's signal when they do.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use depot_core::event::{CompletionSignal, CompletionToken};
use depot_core::mission::MissionExecutor;

use crate::config::SimConfig;

/// Heading error below which forward progress begins, in degrees.
const ALIGN_TOLERANCE_DEG: f32 = 2.0;

/// One drive command as issued by the sequencer, kept for inspection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriveCall {
    pub distance_in: f32,
    pub heading_deg: f32,
    pub timeout_s: f32,
}

/// Actuation kinds the rig can have in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
enum RigCommand {
    Drive { heading_deg: f32 },
    Lift,
    Holder,
    DropMarker,
    ResetDropper,
}

/// A scheduled completion for an issued command.
#[derive(Debug, Clone, Copy)]
struct InFlight {
    command: RigCommand,
    complete_at_us: u64,
    /// False when the deadline cut the motion short.
    reaches_target: bool,
    token: CompletionToken,
}

/// Simulated robot implementing the mission actuation contract.
///
/// Keeps a dead-reckoned pose in field coordinates (inches, heading in
/// degrees) so end-to-end tests can assert where a route actually ended up.
pub struct SimRig {
    config: SimConfig,
    rng: StdRng,
    sim_time_us: u64,
    heading_deg: f32,
    target_heading_deg: f32,
    x_in: f32,
    y_in: f32,
    odometer_in: f32,
    drive_remaining_in: f32,
    in_flight: Vec<InFlight>,
    drive_log: Vec<DriveCall>,
    commands_issued: u32,
    lift_lowered: bool,
    holder_released: bool,
    marker_dropped: bool,
    dropper_stowed: bool,
    mission_complete_calls: u32,
}

impl SimRig {
    /// Create a new rig with the given configuration.
    pub fn new(config: SimConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            rng,
            sim_time_us: 0,
            heading_deg: 0.0,
            target_heading_deg: 0.0,
            x_in: 0.0,
            y_in: 0.0,
            odometer_in: 0.0,
            drive_remaining_in: 0.0,
            in_flight: Vec::new(),
            drive_log: Vec::new(),
            commands_issued: 0,
            lift_lowered: false,
            holder_released: false,
            marker_dropped: false,
            dropper_stowed: true,
            mission_complete_calls: 0,
        }
    }

    /// Advance the simulation by `dt_us`, settling any due completions.
    ///
    /// Completions fire their captured token against `signal`. A token from
    /// an abandoned wait lands stale there and only bumps the stale counter.
    pub fn step(&mut self, dt_us: u64, signal: &CompletionSignal) {
        self.sim_time_us += dt_us;
        let dt_s = dt_us as f32 / 1_000_000.0;
        self.integrate(dt_s);

        let now = self.sim_time_us;
        let mut done: Vec<InFlight> = Vec::new();
        self.in_flight.retain(|cmd| {
            if cmd.complete_at_us <= now {
                done.push(*cmd);
                false
            } else {
                true
            }
        });
        for cmd in done {
            self.apply_completion(&cmd);
            let _ = signal.fire(cmd.token);
        }
    }

    /// Integrate heading slew and forward progress for one time step.
    fn integrate(&mut self, dt_s: f32) {
        let error = normalize_heading(self.target_heading_deg - self.heading_deg);
        let max_step = self.config.turn_rate_dps * dt_s;
        if error.abs() <= max_step {
            self.heading_deg = normalize_heading(self.target_heading_deg);
        } else {
            self.heading_deg = normalize_heading(self.heading_deg + max_step.copysign(error));
        }

        // Forward progress only once roughly on heading.
        let residual = normalize_heading(self.target_heading_deg - self.heading_deg);
        if residual.abs() < ALIGN_TOLERANCE_DEG && self.drive_remaining_in > 0.0 {
            let advance = (self.config.drive_rate_ips * dt_s).min(self.drive_remaining_in);
            let heading_rad = self.heading_deg.to_radians();
            self.x_in += advance * heading_rad.cos();
            self.y_in += advance * heading_rad.sin();
            self.odometer_in += advance;
            self.drive_remaining_in -= advance;
        }
    }

    fn apply_completion(&mut self, cmd: &InFlight) {
        match cmd.command {
            RigCommand::Drive { heading_deg } => {
                if cmd.reaches_target {
                    // Snap the leftover fraction the integrator has not
                    // covered yet.
                    self.heading_deg = normalize_heading(heading_deg);
                    if self.drive_remaining_in > 0.0 {
                        let heading_rad = self.heading_deg.to_radians();
                        self.x_in += self.drive_remaining_in * heading_rad.cos();
                        self.y_in += self.drive_remaining_in * heading_rad.sin();
                        self.odometer_in += self.drive_remaining_in;
                        self.drive_remaining_in = 0.0;
                    }
                } else {
                    // Deadline hit mid-motion, pose stays where it got to.
                    self.drive_remaining_in = 0.0;
                    self.target_heading_deg = self.heading_deg;
                }
            }
            RigCommand::Lift => {
                if cmd.reaches_target {
                    self.lift_lowered = true;
                }
            }
            RigCommand::Holder => {
                self.holder_released = true;
            }
            RigCommand::DropMarker => {
                self.marker_dropped = true;
                self.dropper_stowed = false;
            }
            RigCommand::ResetDropper => {
                self.dropper_stowed = true;
            }
        }
    }

    fn schedule(
        &mut self,
        command: RigCommand,
        duration_s: f32,
        reaches_target: bool,
        token: CompletionToken,
    ) {
        let complete_at_us = self.sim_time_us + (duration_s * 1_000_000.0) as u64;
        self.in_flight.push(InFlight {
            command,
            complete_at_us,
            reaches_target,
            token,
        });
        self.commands_issued += 1;
    }

    fn jittered(&mut self, base_s: f32) -> f32 {
        if self.config.actuation_jitter <= 0.0 {
            return base_s;
        }
        let spread = self.config.actuation_jitter;
        let factor = 1.0 + self.rng.gen_range(-spread..=spread);
        (base_s * factor).max(0.0)
    }

    /// Current field position in inches.
    pub fn position_in(&self) -> (f32, f32) {
        (self.x_in, self.y_in)
    }

    /// Current heading in degrees, normalized to [-180, 180].
    pub fn heading_deg(&self) -> f32 {
        self.heading_deg
    }

    /// Total distance driven in inches.
    pub fn odometer_in(&self) -> f32 {
        self.odometer_in
    }

    /// Every drive command received, in issue order.
    pub fn drive_log(&self) -> &[DriveCall] {
        &self.drive_log
    }

    /// Total commands issued, drives and servo actions alike.
    pub fn commands_issued(&self) -> u32 {
        self.commands_issued
    }

    /// Commands scheduled but not yet complete.
    pub fn commands_in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// Whether the lift finished lowering.
    pub fn lift_lowered(&self) -> bool {
        self.lift_lowered
    }

    /// Whether the hook holder finished opening.
    pub fn holder_released(&self) -> bool {
        self.holder_released
    }

    /// Whether the marker was deposited.
    pub fn marker_dropped(&self) -> bool {
        self.marker_dropped
    }

    /// Whether the dropper servo is in its stowed position.
    pub fn dropper_stowed(&self) -> bool {
        self.dropper_stowed
    }

    /// How many times the sequencer reported mission completion.
    pub fn mission_complete_calls(&self) -> u32 {
        self.mission_complete_calls
    }

    /// Simulation time in microseconds.
    pub fn sim_time_us(&self) -> u64 {
        self.sim_time_us
    }
}

impl std::fmt::Debug for SimRig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimRig")
            .field("sim_time_us", &self.sim_time_us)
            .field("heading_deg", &self.heading_deg)
            .field("x_in", &self.x_in)
            .field("y_in", &self.y_in)
            .field("in_flight", &self.in_flight.len())
            .finish()
    }
}

impl MissionExecutor for SimRig {
    fn drive(
        &mut self,
        distance_in: f32,
        heading_deg: f32,
        timeout_s: f32,
        token: CompletionToken,
    ) {
        let heading_error = normalize_heading(heading_deg - self.heading_deg);
        let turn_time = heading_error.abs() / self.config.turn_rate_dps;
        let drive_time = distance_in.abs() / self.config.drive_rate_ips;
        let motion_time = self.jittered(turn_time + drive_time);

        self.target_heading_deg = heading_deg;
        self.drive_remaining_in = distance_in.max(0.0);
        self.drive_log.push(DriveCall {
            distance_in,
            heading_deg,
            timeout_s,
        });
        self.schedule(
            RigCommand::Drive { heading_deg },
            motion_time.min(timeout_s),
            motion_time <= timeout_s,
            token,
        );
    }

    fn lower_lift(&mut self, timeout_s: f32, token: CompletionToken) {
        let motion_time = self.jittered(self.config.lift_time_s);
        self.schedule(
            RigCommand::Lift,
            motion_time.min(timeout_s),
            motion_time <= timeout_s,
            token,
        );
    }

    fn release_holder(&mut self, token: CompletionToken) {
        let motion_time = self.jittered(self.config.holder_time_s);
        self.schedule(RigCommand::Holder, motion_time, true, token);
    }

    fn drop_marker(&mut self, token: CompletionToken) {
        let motion_time = self.jittered(self.config.dropper_time_s);
        self.schedule(RigCommand::DropMarker, motion_time, true, token);
    }

    fn reset_dropper(&mut self, token: CompletionToken) {
        let motion_time = self.jittered(self.config.dropper_time_s);
        self.schedule(RigCommand::ResetDropper, motion_time, true, token);
    }

    fn current_heading(&self) -> f32 {
        self.heading_deg
    }

    fn on_mission_complete(&mut self) {
        self.target_heading_deg = self.heading_deg;
        self.drive_remaining_in = 0.0;
        self.mission_complete_calls += 1;
    }
}

/// Normalize a heading to [-180, 180] degrees.
fn normalize_heading(angle_deg: f32) -> f32 {
    let mut a = angle_deg % 360.0;
    if a > 180.0 {
        a -= 360.0;
    } else if a < -180.0 {
        a += 360.0;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK_US: u64 = 20_000; // 50 Hz

    fn create_test_rig(seed: u64) -> SimRig {
        let config = SimConfig {
            seed: Some(seed),
            actuation_jitter: 0.0,
            ..Default::default()
        };
        SimRig::new(config)
    }

    /// Steps until the signal fires or the step budget runs out.
    fn step_until_fired(rig: &mut SimRig, signal: &CompletionSignal, max_steps: u32) -> u32 {
        for i in 0..max_steps {
            rig.step(TICK_US, signal);
            if signal.is_fired() {
                return i + 1;
            }
        }
        panic!("command never completed");
    }

    #[test]
    fn test_turn_in_place_settles_and_fires() {
        let mut rig = create_test_rig(42);
        let signal = CompletionSignal::new();
        let token = signal.arm();

        rig.drive(0.0, 90.0, 2.0, token);
        let steps = step_until_fired(&mut rig, &signal, 200);

        // 90 degrees at 120 deg/s is 0.75s, which is 38 ticks at 50 Hz.
        assert!((37..=39).contains(&steps), "settled in {steps} ticks");
        assert!((rig.heading_deg() - 90.0).abs() < 0.01);
        assert_eq!(rig.commands_in_flight(), 0);
    }

    #[test]
    fn test_straight_drive_advances_position() {
        let mut rig = create_test_rig(42);
        let signal = CompletionSignal::new();
        let token = signal.arm();

        rig.drive(30.0, 0.0, 2.0, token);
        step_until_fired(&mut rig, &signal, 200);

        let (x, y) = rig.position_in();
        assert!((x - 30.0).abs() < 0.01, "expected x = 30, got {x}");
        assert!(y.abs() < 0.01, "expected y = 0, got {y}");
        assert!((rig.odometer_in() - 30.0).abs() < 0.01);
    }

    #[test]
    fn test_deadline_cuts_motion_short() {
        let config = SimConfig {
            drive_rate_ips: 10.0,
            seed: Some(42),
            ..Default::default()
        };
        let mut rig = SimRig::new(config);
        let signal = CompletionSignal::new();
        let token = signal.arm();

        // 100 inches at 10 ips needs 10s, deadline is 1s.
        rig.drive(100.0, 0.0, 1.0, token);
        let steps = step_until_fired(&mut rig, &signal, 200);

        assert_eq!(steps, 50); // exactly the 1s deadline
        let (x, _) = rig.position_in();
        assert!((x - 10.0).abs() < 0.5, "expected ~10 inches, got {x}");
    }

    #[test]
    fn test_lift_completes_within_deadline() {
        let mut rig = create_test_rig(42);
        let signal = CompletionSignal::new();
        let token = signal.arm();

        rig.lower_lift(5.0, token);
        assert!(!rig.lift_lowered());
        step_until_fired(&mut rig, &signal, 200);
        assert!(rig.lift_lowered());
    }

    #[test]
    fn test_lift_deadline_leaves_lift_up() {
        let mut rig = create_test_rig(42); // lift takes 3s
        let signal = CompletionSignal::new();
        let token = signal.arm();

        rig.lower_lift(1.0, token);
        step_until_fired(&mut rig, &signal, 200);
        assert!(!rig.lift_lowered());
    }

    #[test]
    fn test_servo_flags_follow_commands() {
        let mut rig = create_test_rig(42);
        let signal = CompletionSignal::new();

        assert!(rig.dropper_stowed());

        let token = signal.arm();
        rig.release_holder(token);
        step_until_fired(&mut rig, &signal, 100);
        assert!(rig.holder_released());

        let token = signal.arm();
        rig.drop_marker(token);
        step_until_fired(&mut rig, &signal, 100);
        assert!(rig.marker_dropped());
        assert!(!rig.dropper_stowed());

        let token = signal.arm();
        rig.reset_dropper(token);
        step_until_fired(&mut rig, &signal, 100);
        assert!(rig.dropper_stowed());
    }

    #[test]
    fn test_abandoned_command_fires_stale() {
        let mut rig = create_test_rig(42);
        let signal = CompletionSignal::new();

        let old_token = signal.arm();
        rig.drive(0.0, 45.0, 2.0, old_token);

        // Sequencer moved on before the turn finished.
        let _live = signal.arm();

        for _ in 0..100 {
            rig.step(TICK_US, &signal);
        }

        assert_eq!(rig.commands_in_flight(), 0);
        assert!(!signal.is_fired());
        assert_eq!(signal.stale_fires(), 1);
    }

    #[test]
    fn test_completion_fires_exactly_once() {
        let mut rig = create_test_rig(42);
        let signal = CompletionSignal::new();
        let token = signal.arm();

        rig.drive(0.0, 30.0, 2.0, token);
        step_until_fired(&mut rig, &signal, 100);

        // Further steps settle nothing new.
        for _ in 0..20 {
            rig.step(TICK_US, &signal);
        }
        assert_eq!(signal.stale_fires(), 0);
        assert_eq!(rig.commands_issued(), 1);
    }

    #[test]
    fn test_jitter_is_deterministic_per_seed() {
        fn run(seed: u64) -> (f32, u64) {
            let config = SimConfig {
                seed: Some(seed),
                actuation_jitter: 0.2,
                ..Default::default()
            };
            let mut rig = SimRig::new(config);
            let signal = CompletionSignal::new();
            let token = signal.arm();
            rig.drive(20.0, 45.0, 5.0, token);
            step_until_fired(&mut rig, &signal, 500);
            (rig.heading_deg(), rig.sim_time_us())
        }

        let (h1, t1) = run(7);
        let (h2, t2) = run(7);
        assert_eq!(h1, h2);
        assert_eq!(t1, t2);
    }

    #[test]
    fn test_mission_complete_halts_motion() {
        let mut rig = create_test_rig(42);
        let signal = CompletionSignal::new();
        let token = signal.arm();

        rig.drive(50.0, 0.0, 5.0, token);
        for _ in 0..10 {
            rig.step(TICK_US, &signal);
        }
        let (x_before, _) = rig.position_in();
        assert!(x_before > 0.0);

        rig.on_mission_complete();
        for _ in 0..10 {
            rig.step(TICK_US, &signal);
        }
        let (x_after, _) = rig.position_in();
        assert_eq!(x_before, x_after);
        assert_eq!(rig.mission_complete_calls(), 1);
    }

    #[test]
    fn test_normalize_heading() {
        assert_eq!(normalize_heading(0.0), 0.0);
        assert_eq!(normalize_heading(180.0), 180.0);
        assert_eq!(normalize_heading(190.0), -170.0);
        assert_eq!(normalize_heading(-190.0), 170.0);
        assert_eq!(normalize_heading(360.0), 0.0);
        assert_eq!(normalize_heading(540.0), 180.0);
    }
}
