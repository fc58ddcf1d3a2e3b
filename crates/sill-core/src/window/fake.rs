//! Scripted window system for driving the matcher, listing, and runner in
//! tests without touching the OS.

use std::cell::RefCell;

use super::errors::WindowError;
use super::system::WindowSystem;
use super::types::Placement;

#[derive(Clone)]
pub(crate) struct FakeWindow {
    title: Result<String, String>,
    pid: u32,
    process_name: Result<String, String>,
}

impl FakeWindow {
    pub(crate) fn new(title: &str, pid: u32, process_name: &str) -> Self {
        Self {
            title: Ok(title.to_string()),
            pid,
            process_name: Ok(process_name.to_string()),
        }
    }

    /// Title queries for this window fail, as for a window destroyed
    /// between enumeration and resolution.
    pub(crate) fn with_unreadable_title(mut self) -> Self {
        self.title = Err("invalid window handle".to_string());
        self
    }

    /// Process queries for this window's pid fail, as for a process that
    /// exited or denies access.
    pub(crate) fn with_unreadable_process(mut self) -> Self {
        self.process_name = Err("access is denied".to_string());
        self
    }
}

pub(crate) struct FakeWindowSystem {
    windows: Vec<FakeWindow>,
    fail_enumeration: Option<String>,
    fail_apply: Option<String>,
    applied: RefCell<Vec<(usize, Placement)>>,
}

impl FakeWindowSystem {
    pub(crate) fn new(windows: Vec<FakeWindow>) -> Self {
        Self {
            windows,
            fail_enumeration: None,
            fail_apply: None,
            applied: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn failing_enumeration(message: &str) -> Self {
        Self {
            fail_enumeration: Some(message.to_string()),
            ..Self::new(Vec::new())
        }
    }

    pub(crate) fn with_failing_apply(mut self, message: &str) -> Self {
        self.fail_apply = Some(message.to_string());
        self
    }

    /// Every placement applied so far, as (handle, placement) pairs.
    pub(crate) fn applied(&self) -> Vec<(usize, Placement)> {
        self.applied.borrow().clone()
    }
}

impl WindowSystem for FakeWindowSystem {
    type Handle = usize;

    fn enumerate(&self) -> Result<Vec<usize>, WindowError> {
        if let Some(message) = &self.fail_enumeration {
            return Err(WindowError::EnumerationFailed {
                message: message.clone(),
            });
        }
        Ok((0..self.windows.len()).collect())
    }

    fn window_title(&self, handle: usize) -> Result<String, WindowError> {
        self.windows[handle]
            .title
            .clone()
            .map_err(|message| WindowError::QueryFailed {
                operation: "window_title",
                message,
            })
    }

    fn owning_pid(&self, handle: usize) -> u32 {
        self.windows[handle].pid
    }

    fn process_name(&self, pid: u32) -> Result<String, WindowError> {
        self.windows
            .iter()
            .find(|w| w.pid == pid)
            .map(|w| w.process_name.clone())
            .unwrap_or_else(|| Err("no such process".to_string()))
            .map_err(|message| WindowError::QueryFailed {
                operation: "process_name",
                message,
            })
    }

    fn apply_placement(&self, handle: usize, placement: &Placement) -> Result<(), WindowError> {
        if let Some(message) = &self.fail_apply {
            return Err(WindowError::ApplyFailed {
                message: message.clone(),
            });
        }
        self.applied.borrow_mut().push((handle, *placement));
        Ok(())
    }
}
