use regex::Regex;
use tracing::{debug, info, warn};

use super::errors::WindowError;
use super::system::WindowSystem;
use super::types::WindowInfo;

/// List all windows whose title search-matches the pattern.
///
/// Windows whose title, process handle, or executable name cannot be
/// resolved are skipped; they surface only as absence from the result.
/// Only an enumeration failure aborts the listing.
pub fn list_windows<S: WindowSystem>(
    system: &S,
    title_pattern: &Regex,
) -> Result<Vec<WindowInfo>, WindowError> {
    info!(event = "core.window.list_started", pattern = %title_pattern);

    let handles = system.enumerate()?;

    let mut skipped_count = 0;
    let mut result = Vec::new();
    for handle in handles {
        let title = match system.window_title(handle) {
            Ok(title) => title,
            Err(e) => {
                debug!(
                    event = "core.window.list_query_skipped",
                    handle = ?handle,
                    error = %e
                );
                skipped_count += 1;
                continue;
            }
        };

        if !title_pattern.is_match(&title) {
            continue;
        }

        let pid = system.owning_pid(handle);
        let process_name = match system.process_name(pid) {
            Ok(name) => name,
            Err(e) => {
                debug!(
                    event = "core.window.list_query_skipped",
                    handle = ?handle,
                    pid = pid,
                    error = %e
                );
                skipped_count += 1;
                continue;
            }
        };

        result.push(WindowInfo::new(title, pid, process_name));
    }

    if skipped_count > 0 {
        warn!(
            event = "core.window.list_incomplete",
            skipped_count = skipped_count,
            returned_count = result.len()
        );
    }

    info!(event = "core.window.list_completed", count = result.len());
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SillError;
    use crate::window::fake::{FakeWindow, FakeWindowSystem};

    #[test]
    fn test_list_filters_by_title_pattern() {
        let system = FakeWindowSystem::new(vec![
            FakeWindow::new("Untitled - Notepad", 100, "notepad.exe"),
            FakeWindow::new("Calculator", 200, "calc.exe"),
        ]);

        let windows = list_windows(&system, &Regex::new("Notepad").unwrap()).unwrap();
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].title(), "Untitled - Notepad");
        assert_eq!(windows[0].pid(), 100);
        assert_eq!(windows[0].process_name(), "notepad.exe");
    }

    #[test]
    fn test_empty_pattern_matches_everything() {
        let system = FakeWindowSystem::new(vec![
            FakeWindow::new("Untitled - Notepad", 100, "notepad.exe"),
            FakeWindow::new("Calculator", 200, "calc.exe"),
        ]);

        let windows = list_windows(&system, &Regex::new("").unwrap()).unwrap();
        assert_eq!(windows.len(), 2);
    }

    #[test]
    fn test_unresolvable_windows_are_skipped() {
        let system = FakeWindowSystem::new(vec![
            FakeWindow::new("Notepad - one", 1, "notepad.exe").with_unreadable_title(),
            FakeWindow::new("Notepad - two", 2, "notepad.exe").with_unreadable_process(),
            FakeWindow::new("Notepad - three", 3, "notepad.exe"),
        ]);

        let windows = list_windows(&system, &Regex::new("Notepad").unwrap()).unwrap();
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].title(), "Notepad - three");
    }

    #[test]
    fn test_non_matching_windows_skip_process_resolution() {
        // A window filtered out by title never has its process opened, so
        // an unresolvable process behind it cannot shrink the result.
        let system = FakeWindowSystem::new(vec![
            FakeWindow::new("Calculator", 1, "calc.exe").with_unreadable_process(),
            FakeWindow::new("Untitled - Notepad", 2, "notepad.exe"),
        ]);

        let windows = list_windows(&system, &Regex::new("Notepad").unwrap()).unwrap();
        assert_eq!(windows.len(), 1);
    }

    #[test]
    fn test_enumeration_failure_propagates() {
        let system = FakeWindowSystem::failing_enumeration("listing primitive failed");

        let result = list_windows(&system, &Regex::new("").unwrap());
        let error = result.unwrap_err();
        assert_eq!(error.error_code(), "WINDOW_ENUMERATION_FAILED");
    }
}
