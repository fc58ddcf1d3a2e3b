//! Win32 window system backend.

use windows::Win32::Foundation::{CloseHandle, HANDLE, HWND, LPARAM, SetLastError, WIN32_ERROR};
use windows::Win32::System::Threading::{
    OpenProcess, PROCESS_NAME_WIN32, PROCESS_QUERY_LIMITED_INFORMATION, PROCESS_SYNCHRONIZE,
    QueryFullProcessImageNameW,
};
use windows::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GetWindowTextW, GetWindowThreadProcessId, SWP_NOMOVE, SWP_NOSIZE, SWP_NOZORDER,
    SetWindowPos,
};
use windows::core::{BOOL, PWSTR};

use super::errors::WindowError;
use super::system::WindowSystem;
use super::types::Placement;

/// Bounded capacity for title and image-path queries. The OS truncates
/// longer text; 4095 characters covers all realistic titles.
const TEXT_CAPACITY: usize = 4096;

/// Opaque handle to a live top-level window. Valid only for the
/// enumeration pass that produced it.
#[derive(Debug, Clone, Copy)]
pub struct WindowHandle(HWND);

/// Window system backed by the Win32 API.
pub struct Win32WindowSystem;

unsafe extern "system" fn enum_proc(hwnd: HWND, lparam: LPARAM) -> BOOL {
    // Safety: enumerate passes a valid Vec pointer that outlives the call.
    let handles = unsafe { &mut *(lparam.0 as *mut Vec<WindowHandle>) };
    handles.push(WindowHandle(hwnd));
    BOOL(1)
}

impl WindowSystem for Win32WindowSystem {
    type Handle = WindowHandle;

    fn enumerate(&self) -> Result<Vec<WindowHandle>, WindowError> {
        let mut handles: Vec<WindowHandle> = Vec::new();
        unsafe { EnumWindows(Some(enum_proc), LPARAM(&mut handles as *mut _ as isize)) }.map_err(
            |e| WindowError::EnumerationFailed {
                message: e.message(),
            },
        )?;
        Ok(handles)
    }

    fn window_title(&self, handle: WindowHandle) -> Result<String, WindowError> {
        let mut buf = [0u16; TEXT_CAPACITY];
        let len = unsafe {
            SetLastError(WIN32_ERROR(0));
            GetWindowTextW(handle.0, &mut buf)
        };
        if len == 0 {
            // Zero length with no error code set is a genuinely empty title.
            let error = windows::core::Error::from_win32();
            if error.code().is_err() {
                return Err(WindowError::QueryFailed {
                    operation: "GetWindowTextW",
                    message: error.message(),
                });
            }
            return Ok(String::new());
        }
        Ok(String::from_utf16_lossy(&buf[..len as usize]))
    }

    fn owning_pid(&self, handle: WindowHandle) -> u32 {
        let mut pid = 0u32;
        unsafe {
            GetWindowThreadProcessId(handle.0, Some(&mut pid));
        }
        pid
    }

    fn process_name(&self, pid: u32) -> Result<String, WindowError> {
        let process = ProcessQueryHandle::open(pid)?;
        process.executable_name()
    }

    fn apply_placement(
        &self,
        handle: WindowHandle,
        placement: &Placement,
    ) -> Result<(), WindowError> {
        let mut flags = SWP_NOZORDER;
        if placement.preserve_position() {
            flags |= SWP_NOMOVE;
        }
        if placement.preserve_size() {
            flags |= SWP_NOSIZE;
        }
        unsafe {
            SetWindowPos(
                handle.0,
                None,
                placement.x,
                placement.y,
                placement.width,
                placement.height,
                flags,
            )
        }
        .map_err(|e| WindowError::ApplyFailed {
            message: e.message(),
        })
    }
}

/// Query-only process handle, closed on drop on every exit path.
struct ProcessQueryHandle(HANDLE);

impl ProcessQueryHandle {
    fn open(pid: u32) -> Result<Self, WindowError> {
        let handle = unsafe {
            OpenProcess(
                PROCESS_QUERY_LIMITED_INFORMATION | PROCESS_SYNCHRONIZE,
                false,
                pid,
            )
        }
        .map_err(|e| WindowError::QueryFailed {
            operation: "OpenProcess",
            message: e.message(),
        })?;
        Ok(Self(handle))
    }

    fn executable_name(&self) -> Result<String, WindowError> {
        let mut buf = [0u16; TEXT_CAPACITY];
        let mut len = buf.len() as u32;
        unsafe {
            QueryFullProcessImageNameW(self.0, PROCESS_NAME_WIN32, PWSTR(buf.as_mut_ptr()), &mut len)
        }
        .map_err(|e| WindowError::QueryFailed {
            operation: "QueryFullProcessImageNameW",
            message: e.message(),
        })?;
        let path = String::from_utf16_lossy(&buf[..len as usize]);
        Ok(path
            .rsplit(['\\', '/'])
            .next()
            .unwrap_or(path.as_str())
            .to_string())
    }
}

impl Drop for ProcessQueryHandle {
    fn drop(&mut self) {
        unsafe {
            let _ = CloseHandle(self.0);
        }
    }
}
