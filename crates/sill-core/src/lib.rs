//! sill-core: profile-driven window placement.
//!
//! Enumerates the session's top-level windows, resolves each window's
//! owning process, finds the single window matching a stored profile's
//! condition, and moves/resizes it. Used by the `sill` CLI.
//!
//! # Main Entry Points
//!
//! - [`profiles`] - Load profiles, run one against the live window set
//! - [`window`] - Enumeration, per-window queries, matching, placement
//! - [`logging`] - Logging initialization

pub mod errors;
pub mod events;
pub mod logging;
pub mod profiles;
pub mod window;

// Re-export commonly used types at crate root for convenience
pub use errors::{SillError, SillResult};
pub use profiles::{
    Condition, PROFILES_FILE_NAME, ProcessNameTarget, Profile, ProfileError, RunOutcome,
    default_profiles_path, load_profile, run_profile,
};
pub use window::{
    NativeWindowSystem, Placement, WindowError, WindowInfo, WindowSystem, list_windows,
    native_system,
};

// Re-export logging initialization
pub use logging::init_logging;
