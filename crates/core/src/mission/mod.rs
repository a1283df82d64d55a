//! Mission Sequencing Types
//!
//! Phase machine for the depot autonomous run.
//!
//! # Structure
//!
//! - [`phase`]: the fixed phase set and the per-run mission context
//! - [`transition`]: successor selection and the legal-edge whitelist
//! - [`executor`]: trait boundary to the actuation layer, plus tick events
//! - [`sequencer`]: the tick-driven state machine that binds them together
//!
//! # Note
//!
//! This module contains only platform-agnostic logic. Motion simulation and
//! wall-clock scheduling live in the sim crate.

pub mod executor;
pub mod phase;
pub mod sequencer;
pub mod transition;

pub use executor::{MissionExecutor, PhaseEvent};
pub use phase::{MissionContext, Phase};
pub use sequencer::{MissionSequencer, SequencerState, MAX_PHASE_EVENTS};
pub use transition::{is_legal, next_phase, TransitionFault};
