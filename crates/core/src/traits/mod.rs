//! Core traits for platform-agnostic mission logic.
//!
//! This module provides trait abstractions that decouple sequencing logic
//! from the platform that hosts it (simulation, robot controller).
//!
//! # Design
//!
//! - Trait definitions are pure and have no feature gates
//! - Mock implementations are always available for host testing
//! - Platform implementations live in the platform crates

pub mod time;

pub use time::{MockTime, TimeSource};
