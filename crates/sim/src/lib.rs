pub mod clock;
pub mod config;
pub mod error;
pub mod rig;
pub mod runner;
pub mod vision;

pub use clock::SimClock;
pub use config::SimConfig;
pub use error::SimError;
pub use rig::{DriveCall, SimRig};
pub use runner::{MissionReport, MissionRunner};
pub use vision::ScriptedClassifier;
