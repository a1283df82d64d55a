//! Successor selection and transition legality.
//!
//! [`next_phase`] is the single place route branching happens. It is a pure
//! function of the current phase and the mission context, so the whole route
//! table can be exercised without an executor.
//!
//! [`is_legal`] is maintained as an independent whitelist rather than being
//! derived from [`next_phase`]. The sequencer checks every switch against it,
//! including externally forced ones, and latches a [`TransitionFault`] on the
//! first violation.

use super::phase::{MissionContext, Phase};
use crate::perception::TargetSighting;

/// Fault describing one rejected phase switch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionFault {
    pub from: Phase,
    pub to: Phase,
}

impl core::fmt::Display for TransitionFault {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "illegal phase transition: {} -> {}", self.from, self.to)
    }
}

/// Picks the successor of `phase` under `context`.
///
/// Returns `None` only for [`Phase::Done`]. A timed-out scan leaves the
/// sighting `Unknown`, which routes identically to `Center`: straight at the
/// goal without the mineral detour.
pub fn next_phase(phase: Phase, context: &MissionContext) -> Option<Phase> {
    let next = match phase {
        Phase::ScanTarget => Phase::LowerLift,
        Phase::LowerLift => Phase::ReleaseHolder,
        Phase::ReleaseHolder => match context.sighting {
            TargetSighting::Unknown | TargetSighting::Center => Phase::DriveToGoal,
            TargetSighting::Left | TargetSighting::Right => Phase::MoveFromHook,
        },
        Phase::MoveFromHook => Phase::TurnToTarget,
        Phase::TurnToTarget => Phase::DriveToTarget,
        Phase::DriveToTarget => Phase::TurnToGoal,
        Phase::TurnToGoal => Phase::DriveToGoal,
        Phase::DriveToGoal => Phase::AlignForDrop,
        Phase::AlignForDrop => Phase::DropMarker,
        Phase::DropMarker => Phase::ResetDropper,
        Phase::ResetDropper => Phase::LineUpForPark,
        Phase::LineUpForPark => Phase::DriveToPark,
        Phase::DriveToPark => Phase::Done,
        Phase::Done => return None,
    };
    Some(next)
}

/// Returns whether `from -> to` is an edge of the route graph.
///
/// The whitelist covers every edge reachable under some sighting, so both
/// successors of [`Phase::ReleaseHolder`] are legal regardless of context.
pub fn is_legal(from: Phase, to: Phase) -> bool {
    matches!(
        (from, to),
        (Phase::ScanTarget, Phase::LowerLift)
            | (Phase::LowerLift, Phase::ReleaseHolder)
            | (Phase::ReleaseHolder, Phase::MoveFromHook)
            | (Phase::ReleaseHolder, Phase::DriveToGoal)
            | (Phase::MoveFromHook, Phase::TurnToTarget)
            | (Phase::TurnToTarget, Phase::DriveToTarget)
            | (Phase::DriveToTarget, Phase::TurnToGoal)
            | (Phase::TurnToGoal, Phase::DriveToGoal)
            | (Phase::DriveToGoal, Phase::AlignForDrop)
            | (Phase::AlignForDrop, Phase::DropMarker)
            | (Phase::DropMarker, Phase::ResetDropper)
            | (Phase::ResetDropper, Phase::LineUpForPark)
            | (Phase::LineUpForPark, Phase::DriveToPark)
            | (Phase::DriveToPark, Phase::Done)
    )
}

// ============================================================================
// Unit Tests
// ============================================================================
