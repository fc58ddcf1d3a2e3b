//! No-op window system for non-Windows hosts.
//!
//! Enumerates nothing and applies nothing, which keeps the CLI buildable
//! and its profile handling testable off-platform.

use super::errors::WindowError;
use super::system::WindowSystem;
use super::types::Placement;

pub struct NoopWindowSystem;

impl WindowSystem for NoopWindowSystem {
    type Handle = u32;

    fn enumerate(&self) -> Result<Vec<u32>, WindowError> {
        Ok(Vec::new())
    }

    fn window_title(&self, _handle: u32) -> Result<String, WindowError> {
        Ok(String::new())
    }

    fn owning_pid(&self, _handle: u32) -> u32 {
        0
    }

    fn process_name(&self, _pid: u32) -> Result<String, WindowError> {
        Ok(String::new())
    }

    fn apply_placement(&self, _handle: u32, _placement: &Placement) -> Result<(), WindowError> {
        Ok(())
    }
}
