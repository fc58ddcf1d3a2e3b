use serde::{Deserialize, Serialize};

/// Read-only snapshot of one top-level window.
///
/// Built from live OS queries during an enumeration pass and discarded
/// after use; the underlying window may be gone by the time this is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowInfo {
    title: String,
    pid: u32,
    process_name: String,
}

impl WindowInfo {
    pub fn new(title: String, pid: u32, process_name: String) -> Self {
        Self {
            title,
            pid,
            process_name,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn pid(&self) -> u32 {
        self.pid
    }

    pub fn process_name(&self) -> &str {
        &self.process_name
    }
}

/// Target position and size for a window.
///
/// Negative values are sentinels: a negative `x` or `y` keeps the window
/// where it is (both coordinates are then ignored as a pair), and a
/// negative `width` or `height` keeps its current size. Partial placement
/// is expressed through these sentinels, not through absent fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Placement {
    /// Whether the window's current position is kept.
    pub fn preserve_position(&self) -> bool {
        self.x < 0 || self.y < 0
    }

    /// Whether the window's current size is kept.
    pub fn preserve_size(&self) -> bool {
        self.width < 0 || self.height < 0
    }
}
