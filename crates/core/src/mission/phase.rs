//! Mission phase set and per-run context.

use crate::perception::TargetSighting;

/// One phase of the depot autonomous run.
///
/// Phases execute strictly in sequence. Branching happens only through the
/// latched target sighting, which picks between the center route (straight
/// to the goal) and the side routes (nudge the target first, then cut back).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Poll the classifier until a sighting or the scan deadline.
    ScanTarget,
    /// Bring the lift down off the hanging hook.
    LowerLift,
    /// Open the holder that kept the robot on the hook.
    ReleaseHolder,
    /// Short straight move to get clear of the hook hardware.
    MoveFromHook,
    /// Turn toward the sighted target mineral.
    TurnToTarget,
    /// Drive through the target mineral.
    DriveToTarget,
    /// Turn back toward the goal after displacing the target.
    TurnToGoal,
    /// Drive into the goal depot.
    DriveToGoal,
    /// Rotate square to the depot wall for the drop.
    AlignForDrop,
    /// Actuate the marker dropper.
    DropMarker,
    /// Stow the dropper servo again.
    ResetDropper,
    /// Turn onto the parking line heading.
    LineUpForPark,
    /// Long drive out to the parking position.
    DriveToPark,
    /// Terminal phase, runs once and ends the mission.
    Done,
}

impl Phase {
    /// Returns the phase name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            Phase::ScanTarget => "scan_target",
            Phase::LowerLift => "lower_lift",
            Phase::ReleaseHolder => "release_holder",
            Phase::MoveFromHook => "move_from_hook",
            Phase::TurnToTarget => "turn_to_target",
            Phase::DriveToTarget => "drive_to_target",
            Phase::TurnToGoal => "turn_to_goal",
            Phase::DriveToGoal => "drive_to_goal",
            Phase::AlignForDrop => "align_for_drop",
            Phase::DropMarker => "drop_marker",
            Phase::ResetDropper => "reset_dropper",
            Phase::LineUpForPark => "line_up_for_park",
            Phase::DriveToPark => "drive_to_park",
            Phase::Done => "done",
        }
    }
}

impl core::fmt::Display for Phase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Mutable state shared by phase bodies across one mission run.
///
/// `hold_heading_deg` carries the heading a drive phase locked in so the
/// following phase can keep or extend it, mirroring how turn phases feed
/// their exit heading into the next straight.
#[derive(Clone, Copy, Debug, Default)]
pub struct MissionContext {
    /// Target sighting latched by the scan phase.
    pub sighting: TargetSighting,
    /// Heading in degrees the most recent turn or drive committed to.
    pub hold_heading_deg: f32,
}

// ============================================================================
// Unit Tests
// ============================================================================
