//! Placement profiles: the stored condition/position records, their JSON
//! loading and validation, and the run orchestration.

pub mod errors;
pub mod loading;
pub mod runner;
pub mod types;

pub use errors::ProfileError;
pub use loading::{PROFILES_FILE_NAME, default_profiles_path, load_profile};
pub use runner::{RunOutcome, run_profile};
pub use types::{Condition, ProcessNameTarget, Profile};
