//! Parameter management types and utilities
//!
//! This module provides core parameter types for run configuration. Values
//! live in a [`ParameterStore`] so a host tool can list and override them
//! before a run; [`MissionParams`] is the typed snapshot the sequencer uses.

pub mod error;
pub mod mission;
pub mod storage;

pub use error::ParameterError;
pub use mission::MissionParams;
pub use storage::{ParamFlags, ParamMetadata, ParamValue, ParameterStore};
pub use storage::{MAX_PARAMS, PARAM_NAME_LEN};
