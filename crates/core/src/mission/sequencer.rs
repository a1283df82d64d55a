//! Mission Sequencer
//!
//! Platform-agnostic state machine that owns phase advancement for the depot
//! autonomous run. Phases execute strictly in order and the machine only
//! moves when the completion signal armed for the current phase fires.
//!
//! The sequencer does not know about motors, servos, cameras, or any other
//! platform service. It drives physical execution through the
//! [`MissionExecutor`] trait and perception through [`TargetSampler`].
//!
//! # Tick Protocol
//!
//! One `tick` call executes at most one phase body:
//!
//! 1. If the live completion signal has not fired, return immediately.
//! 2. Arm a fresh wait, run the current phase body exactly once.
//! 3. Ask the route table for the successor and validate it against the
//!    legal-edge whitelist. A violation latches a fault and stops the run.
//! 4. Switch the current phase after the body has returned, never during it.
//!
//! The scan phase is the one blocking body: it holds its tick for the full
//! perception gate run, up to the scan deadline.

use heapless::Vec;

use super::executor::{MissionExecutor, PhaseEvent};
use super::phase::{MissionContext, Phase};
use super::transition::{is_legal, next_phase, TransitionFault};
use crate::event::CompletionSignal;
use crate::parameters::MissionParams;
use crate::perception::{PerceptionGate, ScanStats, TargetSampler, TargetSighting};
use crate::traits::TimeSource;

/// Maximum phase events emitted per tick.
pub const MAX_PHASE_EVENTS: usize = 4;

/// Lifecycle state of the sequencer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequencerState {
    /// Never started, or re-armed for a fresh run.
    Idle,
    /// Ticking through the route.
    Running,
    /// Terminal phase executed, mission finished normally.
    Complete,
    /// Halted by `stop()` or a transition fault.
    Stopped,
}

impl SequencerState {
    /// Returns the state name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            SequencerState::Idle => "idle",
            SequencerState::Running => "running",
            SequencerState::Complete => "complete",
            SequencerState::Stopped => "stopped",
        }
    }
}

impl core::fmt::Display for SequencerState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Mission sequencer, drives phase execution through MissionExecutor.
///
/// Owns:
/// - The current phase and the per-run [`MissionContext`]
/// - The shared [`CompletionSignal`] every phase body arms
/// - The scan gate and its deadline
/// - Transition validation and the latched [`TransitionFault`]
///
/// Completion flows back through tokens: each body hands the token it minted
/// to the actuation layer, which fires it against [`signal`](Self::signal)
/// when the action finishes. Stale tokens from abandoned waits are rejected
/// there without sequencer involvement.
pub struct MissionSequencer {
    state: SequencerState,
    current: Phase,
    context: MissionContext,
    signal: CompletionSignal,
    gate: PerceptionGate,
    params: MissionParams,
    /// First rejected switch, kept for post-mortem status.
    fault: Option<TransitionFault>,
    /// Timestamp (ms) when the current phase became current.
    phase_entered_at_ms: u64,
    /// Phase bodies executed since the last `start()`.
    phases_executed: u32,
}

impl MissionSequencer {
    /// Create a new sequencer in Idle state.
    ///
    /// The scan gate deadline is taken from `params` at construction.
    pub fn new(params: MissionParams) -> Self {
        let scan_timeout_ms = (params.scan_timeout_s * 1000.0) as u64;
        Self {
            state: SequencerState::Idle,
            current: Phase::ScanTarget,
            context: MissionContext::default(),
            signal: CompletionSignal::new(),
            gate: PerceptionGate::new(scan_timeout_ms),
            params,
            fault: None,
            phase_entered_at_ms: 0,
            phases_executed: 0,
        }
    }

    /// Get current lifecycle state.
    pub fn state(&self) -> SequencerState {
        self.state
    }

    /// Get the phase the next eligible tick will execute.
    pub fn current_phase(&self) -> Phase {
        self.current
    }

    /// Get the per-run mission context.
    pub fn context(&self) -> MissionContext {
        self.context
    }

    /// Get the latched fault, if a phase switch was rejected.
    pub fn fault(&self) -> Option<TransitionFault> {
        self.fault
    }

    /// Get the completion signal phase bodies arm.
    ///
    /// The actuation layer fires captured tokens against this signal.
    pub fn signal(&self) -> &CompletionSignal {
        &self.signal
    }

    /// Get the mission parameters the sequencer was built with.
    pub fn params(&self) -> &MissionParams {
        &self.params
    }

    /// Count of phase bodies executed since the last `start()`.
    pub fn phases_executed(&self) -> u32 {
        self.phases_executed
    }

    /// Stats from the scan gate, once the scan phase has run.
    pub fn scan_stats(&self) -> Option<ScanStats> {
        self.gate.last_scan()
    }

    /// Whether the next tick will execute a phase body.
    pub fn is_ready(&self) -> bool {
        self.state == SequencerState::Running && self.signal.is_fired()
    }

    /// Milliseconds the current phase has been current.
    ///
    /// Watchdog hook: a stalled actuator shows up as this value growing
    /// while the phase stays put.
    pub fn time_in_phase_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.phase_entered_at_ms)
    }

    /// Start a run at `initial`, resetting per-run state.
    ///
    /// Seeds the completion signal so the first tick executes the initial
    /// phase body. The signal is reused across runs, which keeps tokens
    /// minted before the restart stale.
    pub fn start<T: TimeSource>(
        &mut self,
        initial: Phase,
        time: &T,
    ) -> Vec<PhaseEvent, MAX_PHASE_EVENTS> {
        self.state = SequencerState::Running;
        self.current = initial;
        self.context = MissionContext::default();
        self.fault = None;
        self.phases_executed = 0;
        self.phase_entered_at_ms = time.now_ms();

        let token = self.signal.arm();
        let _ = self.signal.fire(token);

        let mut events = Vec::new();
        let _ = events.push(PhaseEvent::PhaseEntered(initial));
        events
    }

    /// Halt the run. Any state transitions to Stopped, repeat calls hold it.
    ///
    /// Phase, context and fault are left readable for post-mortem status.
    pub fn stop(&mut self) -> Vec<PhaseEvent, MAX_PHASE_EVENTS> {
        self.state = SequencerState::Stopped;
        Vec::new()
    }

    /// Main tick: execute at most one phase body and emit events.
    ///
    /// Called each update cycle by the platform layer. Does nothing unless
    /// the sequencer is running and the live wait has fired.
    pub fn tick<T: TimeSource>(
        &mut self,
        executor: &mut dyn MissionExecutor,
        sampler: &mut dyn TargetSampler,
        time: &T,
    ) -> Vec<PhaseEvent, MAX_PHASE_EVENTS> {
        let mut events = Vec::new();

        if !self.is_ready() {
            return events;
        }

        let phase = self.current;
        self.phases_executed += 1;
        let next = self.execute_phase(phase, executor, sampler, time);
        let _ = events.push(PhaseEvent::PhaseExecuted(phase));

        match next {
            Some(next) => {
                if is_legal(phase, next) {
                    self.current = next;
                    self.phase_entered_at_ms = time.now_ms();
                    let _ = events.push(PhaseEvent::PhaseEntered(next));
                } else {
                    let fault = TransitionFault { from: phase, to: next };
                    self.fault = Some(fault);
                    self.state = SequencerState::Stopped;
                    let _ = events.push(PhaseEvent::Fault(fault));
                }
            }
            None => {
                self.state = SequencerState::Complete;
                executor.on_mission_complete();
                let _ = events.push(PhaseEvent::MissionComplete);
            }
        }

        events
    }

    /// Replace the pending phase while running, skipping its body.
    ///
    /// The forced switch is validated from the pending phase like any other
    /// edge: one outside the route graph latches a fault, stops the run and
    /// returns an error. The whitelist is context-free, so either branch out
    /// of a fork can be forced regardless of the latched sighting.
    /// On success the new phase is immediately eligible, and the token the
    /// abandoned wait handed out goes stale.
    pub fn set_current<T: TimeSource>(
        &mut self,
        phase: Phase,
        time: &T,
    ) -> Result<Vec<PhaseEvent, MAX_PHASE_EVENTS>, &'static str> {
        if self.state != SequencerState::Running {
            return Err("sequencer not running");
        }

        if !is_legal(self.current, phase) {
            self.fault = Some(TransitionFault {
                from: self.current,
                to: phase,
            });
            self.state = SequencerState::Stopped;
            return Err("illegal phase transition");
        }

        self.current = phase;
        self.phase_entered_at_ms = time.now_ms();
        let token = self.signal.arm();
        let _ = self.signal.fire(token);

        let mut events = Vec::new();
        let _ = events.push(PhaseEvent::PhaseEntered(phase));
        Ok(events)
    }

    /// Run one phase body and return the route successor.
    ///
    /// Arms the completion signal first, so every token handed out below
    /// belongs to the wait that follows this body.
    fn execute_phase<T: TimeSource>(
        &mut self,
        phase: Phase,
        executor: &mut dyn MissionExecutor,
        sampler: &mut dyn TargetSampler,
        time: &T,
    ) -> Option<Phase> {
        let token = self.signal.arm();

        match phase {
            Phase::ScanTarget => {
                self.context.sighting = self.gate.run(sampler, time);
                let _ = self.signal.fire(token);
            }
            Phase::LowerLift => {
                executor.lower_lift(self.params.lift_timeout_s, token);
            }
            Phase::ReleaseHolder => {
                executor.release_holder(token);
            }
            Phase::MoveFromHook => {
                executor.drive(
                    self.params.hook_clear_in,
                    0.0,
                    self.params.hook_clear_timeout_s,
                    token,
                );
            }
            Phase::TurnToTarget => {
                let angle = if self.context.sighting == TargetSighting::Left {
                    self.params.target_angle_left_deg
                } else {
                    self.params.target_angle_right_deg
                };
                self.context.hold_heading_deg = angle;
                executor.drive(0.0, angle, self.params.turn_timeout_s, token);
            }
            Phase::DriveToTarget => {
                // Hold whatever heading the turn actually ended on rather
                // than the commanded angle.
                let heading = executor.current_heading();
                self.context.hold_heading_deg = heading;
                executor.drive(
                    self.params.target_drive_in,
                    heading,
                    self.params.target_drive_timeout_s,
                    token,
                );
            }
            Phase::TurnToGoal => {
                match self.context.sighting {
                    TargetSighting::Left => {
                        self.context.hold_heading_deg = self.params.goal_angle_left_deg;
                    }
                    TargetSighting::Right => {
                        self.context.hold_heading_deg = self.params.goal_angle_right_deg;
                    }
                    TargetSighting::Unknown | TargetSighting::Center => {}
                }
                executor.drive(
                    0.0,
                    self.context.hold_heading_deg,
                    self.params.turn_timeout_s,
                    token,
                );
            }
            Phase::DriveToGoal => match self.context.sighting {
                TargetSighting::Unknown | TargetSighting::Center => {
                    executor.drive(
                        self.params.goal_long_in,
                        0.0,
                        self.params.goal_long_timeout_s,
                        token,
                    );
                }
                TargetSighting::Left | TargetSighting::Right => {
                    let heading = executor.current_heading();
                    self.context.hold_heading_deg = heading;
                    executor.drive(
                        self.params.goal_side_in,
                        heading,
                        self.params.goal_side_timeout_s,
                        token,
                    );
                }
            },
            Phase::AlignForDrop => {
                executor.drive(
                    0.0,
                    self.params.drop_heading_deg,
                    self.params.drop_turn_timeout_s,
                    token,
                );
            }
            Phase::DropMarker => {
                executor.drop_marker(token);
            }
            Phase::ResetDropper => {
                executor.reset_dropper(token);
            }
            Phase::LineUpForPark => {
                executor.drive(
                    0.0,
                    self.params.park_line_deg,
                    self.params.park_line_timeout_s,
                    token,
                );
            }
            Phase::DriveToPark => {
                executor.drive(
                    self.params.park_drive_in,
                    self.params.park_heading_deg,
                    self.params.park_drive_timeout_s,
                    token,
                );
            }
            Phase::Done => {
                // Issues nothing. The arm above leaves the final wait
                // unsatisfied, so a late fire from the park drive is stale.
            }
        }

        next_phase(phase, &self.context)
    }
}

impl Default for MissionSequencer {
    fn default() -> Self {
        Self::new(MissionParams::default())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
