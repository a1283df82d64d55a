//! Mission Executor Trait and Event Types
//!
//! Defines the contract between the MissionSequencer and the actuation layer
//! that physically carries out phase commands. Commands are fire-and-forget:
//! each call receives the [`CompletionToken`] it must fire when the motion or
//! servo action finishes.

use super::phase::Phase;
use super::transition::TransitionFault;
use crate::event::CompletionToken;

/// Events emitted by the sequencer for telemetry coordination.
///
/// The host layer turns these into log lines and run reports:
/// - `PhaseExecuted` -> one row in the traversal record
/// - `PhaseEntered` -> marks where the per-phase watchdog clock restarted
/// - `MissionComplete` -> final report trigger
/// - `Fault` -> aborts the run
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PhaseEvent {
    /// A phase body ran to completion this tick.
    PhaseExecuted(Phase),
    /// The sequencer switched to a new current phase.
    PhaseEntered(Phase),
    /// Terminal phase executed, mission is over.
    MissionComplete,
    /// A phase switch failed the legality check and the run stopped.
    Fault(TransitionFault),
}

/// Actuation contract between sequencer and platform layer.
///
/// Every long-running command takes a token minted for the wait that the
/// sequencer just armed. The implementation fires it once the action is
/// physically done. Commands never block; the sequencer simply stays in the
/// current phase until the fire lands.
pub trait MissionExecutor {
    /// Drive `distance_in` inches while holding `heading_deg`.
    ///
    /// A zero distance is a turn in place to `heading_deg`. Implementations
    /// give up and fire the token anyway once `timeout_s` passes, leaving the
    /// pose wherever it got to.
    fn drive(&mut self, distance_in: f32, heading_deg: f32, timeout_s: f32, token: CompletionToken);

    /// Lower the lift to the ground position.
    fn lower_lift(&mut self, timeout_s: f32, token: CompletionToken);

    /// Open the holder that latches the robot to the hook.
    fn release_holder(&mut self, token: CompletionToken);

    /// Swing the marker dropper to the deposit position.
    fn drop_marker(&mut self, token: CompletionToken);

    /// Return the marker dropper to its stowed position.
    fn reset_dropper(&mut self, token: CompletionToken);

    /// Current estimated heading in degrees.
    fn current_heading(&self) -> f32;

    /// Called once when the terminal phase has executed.
    fn on_mission_complete(&mut self);
}
