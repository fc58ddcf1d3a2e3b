use tracing::debug;

use super::system::WindowSystem;
use crate::profiles::types::Condition;

/// A window that satisfied every present criterion, together with the
/// fields resolved while matching so callers need not re-query racy state.
#[derive(Debug)]
pub struct FirstMatch<H> {
    pub handle: H,
    pub title: String,
    pub pid: Option<u32>,
    pub process_name: Option<String>,
}

/// Find the first window in enumeration order satisfying the condition.
///
/// The title is always resolved; the owning pid and executable name only
/// when a criterion needs them. A window whose required fields cannot be
/// resolved is skipped and matching continues - windows close mid-pass and
/// that is expected, not an error. Returns `None` when the sequence is
/// exhausted without a match.
pub fn find_first_match<S: WindowSystem>(
    system: &S,
    handles: &[S::Handle],
    condition: &Condition,
) -> Option<FirstMatch<S::Handle>> {
    for &handle in handles {
        let title = match system.window_title(handle) {
            Ok(title) => title,
            Err(e) => {
                debug!(
                    event = "core.window.match_candidate_skipped",
                    handle = ?handle,
                    error = %e
                );
                continue;
            }
        };

        let pid = condition.wants_pid().then(|| system.owning_pid(handle));

        let mut process_name = None;
        if condition.wants_executable_name() {
            match system.process_name(pid.unwrap_or(0)) {
                Ok(name) => process_name = Some(name),
                Err(e) => {
                    debug!(
                        event = "core.window.match_candidate_skipped",
                        handle = ?handle,
                        error = %e
                    );
                    continue;
                }
            }
        }

        if condition.matches(&title, pid, process_name.as_deref()) {
            debug!(
                event = "core.window.match_found",
                handle = ?handle,
                title = %title,
                pid = ?pid
            );
            return Some(FirstMatch {
                handle,
                title,
                pid,
                process_name,
            });
        }
    }
    None
}
