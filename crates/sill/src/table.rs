use sill_core::WindowInfo;

const TITLE_WIDTH: usize = 40;
const PROCESS_WIDTH: usize = 40;
const PID_WIDTH: usize = 10;

/// Print windows as a fixed-width table: Title, Process Name, PID.
pub fn print_windows_table(windows: &[WindowInfo]) {
    println!(
        "{:<tw$} {:<pw$} {:>iw$}",
        "Title",
        "Process Name",
        "PID",
        tw = TITLE_WIDTH,
        pw = PROCESS_WIDTH,
        iw = PID_WIDTH
    );
    println!(
        "{} {} {}",
        "-".repeat(TITLE_WIDTH),
        "-".repeat(PROCESS_WIDTH),
        "-".repeat(PID_WIDTH)
    );
    for window in windows {
        println!(
            "{:<tw$} {:<pw$} {:>iw$}",
            truncate(window.title(), TITLE_WIDTH),
            truncate(window.process_name(), PROCESS_WIDTH),
            window.pid(),
            tw = TITLE_WIDTH,
            pw = PROCESS_WIDTH,
            iw = PID_WIDTH
        );
    }
}

/// Truncate to `max` characters, marking the cut with an ellipsis.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}
