use std::fmt::Debug;

use super::errors::WindowError;
use super::types::Placement;

/// Access to the host's top-level windows.
///
/// Handles are opaque and valid only for the enumeration pass that produced
/// them; a window can close between `enumerate` and a later query, in which
/// case the query fails and the caller skips that window. Implementations
/// never retry.
pub trait WindowSystem {
    type Handle: Copy + Debug;

    /// Snapshot of all top-level window handles, in the host's native
    /// enumeration order (front to back, not stable across runs).
    fn enumerate(&self) -> Result<Vec<Self::Handle>, WindowError>;

    /// The window's title text. An empty title is a successful result,
    /// distinct from a failed query.
    fn window_title(&self, handle: Self::Handle) -> Result<String, WindowError>;

    /// Process id of the window's owning process. Cannot fail; 0 means the
    /// owner is unknown.
    fn owning_pid(&self, handle: Self::Handle) -> u32;

    /// Executable base name of the process with the given pid. Opens the
    /// process for query access and releases it before returning.
    fn process_name(&self, pid: u32) -> Result<String, WindowError>;

    /// Move/resize the window in a single request, honoring the placement's
    /// preserve sentinels. Never changes stacking order.
    fn apply_placement(&self, handle: Self::Handle, placement: &Placement)
    -> Result<(), WindowError>;
}
