//! depot_core - Pure no_std mission logic for the depot autonomous run
//!
//! This crate contains the platform-agnostic phase machine and its support
//! types, testable on host without any feature flags or runtime dependencies.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Pure no_std**: No std library dependencies
//! - **Trait abstractions**: Platform services injected via traits
//!
//! # Modules
//!
//! - [`traits`]: Platform-agnostic trait abstractions (TimeSource)
//! - [`event`]: Completion signalling with generation-checked tokens
//! - [`perception`]: Target sighting types and the blocking scan gate
//! - [`mission`]: Phase machine, route table, and the sequencer
//! - [`parameters`]: Parameter store and mission parameter definitions
//! - [`scheduler`]: Tick task types and execution statistics

#![no_std]

pub mod event;
pub mod mission;
pub mod parameters;
pub mod perception;
pub mod scheduler;
pub mod traits;
