//! Window enumeration, per-window queries, matching, and placement.
//!
//! The [`WindowSystem`] trait is the seam between the matching pipeline and
//! the host OS; the Win32 backend implements it on Windows, and a no-op
//! backend keeps other hosts buildable.

pub mod errors;
pub mod listing;
pub mod matcher;
pub mod system;
pub mod types;

#[cfg(windows)]
mod win32;

#[cfg(not(windows))]
mod noop;

#[cfg(test)]
pub(crate) mod fake;

pub use errors::WindowError;
pub use listing::list_windows;
pub use matcher::{FirstMatch, find_first_match};
pub use system::WindowSystem;
pub use types::{Placement, WindowInfo};

#[cfg(windows)]
pub use win32::{Win32WindowSystem, WindowHandle};

#[cfg(not(windows))]
pub use noop::NoopWindowSystem;

/// Window system backing the current platform.
#[cfg(windows)]
pub type NativeWindowSystem = Win32WindowSystem;

/// Window system backing the current platform.
#[cfg(not(windows))]
pub type NativeWindowSystem = NoopWindowSystem;

#[cfg(windows)]
pub fn native_system() -> NativeWindowSystem {
    Win32WindowSystem
}

#[cfg(not(windows))]
pub fn native_system() -> NativeWindowSystem {
    NoopWindowSystem
}
