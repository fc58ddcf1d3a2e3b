use tracing::info;

use super::types::Profile;
use crate::window::errors::WindowError;
use crate::window::matcher::find_first_match;
use crate::window::system::WindowSystem;
use crate::window::types::Placement;

/// Result of running a profile: one window was repositioned, or nothing
/// matched. No match is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Applied {
        title: String,
        pid: u32,
        placement: Placement,
    },
    NoMatch,
}

/// Enumerate windows, find the first one satisfying the profile's
/// condition, and apply the profile's placement to it.
///
/// Exactly one window is ever acted on. Once the matcher commits to a
/// window the placement is attempted on that window alone; an apply
/// failure ends the run without trying any other candidate.
pub fn run_profile<S: WindowSystem>(
    system: &S,
    profile: &Profile,
) -> Result<RunOutcome, WindowError> {
    info!(event = "core.profile.run_started", id = %profile.id);

    let handles = system.enumerate()?;

    let Some(matched) = find_first_match(system, &handles, &profile.condition) else {
        info!(
            event = "core.profile.run_no_match",
            id = %profile.id,
            scanned = handles.len()
        );
        return Ok(RunOutcome::NoMatch);
    };

    system.apply_placement(matched.handle, &profile.pos)?;

    let pid = matched
        .pid
        .unwrap_or_else(|| system.owning_pid(matched.handle));
    info!(
        event = "core.profile.run_completed",
        id = %profile.id,
        title = %matched.title,
        pid = pid
    );
    Ok(RunOutcome::Applied {
        title: matched.title,
        pid,
        placement: profile.pos,
    })
}
