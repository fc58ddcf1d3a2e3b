use regex::Regex;

use crate::window::types::Placement;

/// Which text the `processName` pattern is matched against.
///
/// The longstanding behavior matches the pattern against the window title.
/// Existing profiles may depend on it, so it stays the default; matching
/// the resolved executable name is opt-in per profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProcessNameTarget {
    #[default]
    WindowTitle,
    ExecutableName,
}

/// Criteria selecting a single window.
///
/// Every present criterion must pass. A condition with no criteria matches
/// the first window whose title can be resolved.
#[derive(Debug, Clone, Default)]
pub struct Condition {
    pub window_title: Option<Regex>,
    pub process_name: Option<Regex>,
    pub pid: Option<u32>,
    pub process_name_target: ProcessNameTarget,
}

impl Condition {
    /// Whether matching needs the executable name resolved for each
    /// candidate window.
    pub fn wants_executable_name(&self) -> bool {
        self.process_name.is_some()
            && self.process_name_target == ProcessNameTarget::ExecutableName
    }

    /// Whether matching needs the owning pid resolved for each candidate
    /// window.
    pub fn wants_pid(&self) -> bool {
        self.pid.is_some() || self.wants_executable_name()
    }

    /// Evaluate all present criteria against a resolved window.
    ///
    /// `pid` and `process_name` may be absent when the condition does not
    /// need them; a criterion that needs an absent field fails.
    pub fn matches(&self, title: &str, pid: Option<u32>, process_name: Option<&str>) -> bool {
        if let Some(pattern) = &self.process_name {
            let identity = match self.process_name_target {
                ProcessNameTarget::WindowTitle => title,
                ProcessNameTarget::ExecutableName => match process_name {
                    Some(name) => name,
                    None => return false,
                },
            };
            if !pattern.is_match(identity) {
                return false;
            }
        }
        if let Some(pattern) = &self.window_title
            && !pattern.is_match(title)
        {
            return false;
        }
        if let Some(want) = self.pid
            && pid != Some(want)
        {
            return false;
        }
        true
    }
}

/// A stored placement rule: a condition picking one window and the
/// position to give it. Looked up by `id`, immutable once loaded.
#[derive(Debug, Clone)]
pub struct Profile {
    pub id: String,
    pub condition: Condition,
    pub pos: Placement,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title_condition(pattern: &str) -> Condition {
        Condition {
            window_title: Some(Regex::new(pattern).unwrap()),
            ..Condition::default()
        }
    }

    #[test]
    fn test_title_pattern_uses_search_semantics() {
        let condition = title_condition("Notepad");
        assert!(condition.matches("Untitled - Notepad", None, None));
        assert!(!condition.matches("Calculator", None, None));
    }

    #[test]
    fn test_pid_must_match_exactly() {
        let condition = Condition {
            pid: Some(4242),
            ..Condition::default()
        };
        assert!(condition.matches("anything", Some(4242), None));
        assert!(!condition.matches("anything", Some(4243), None));
        assert!(!condition.matches("anything", None, None));
    }

    #[test]
    fn test_empty_condition_matches_any_window() {
        let condition = Condition::default();
        assert!(condition.matches("whatever", None, None));
        assert!(condition.matches("", None, None));
    }

    #[test]
    fn test_process_name_pattern_matches_the_title_by_default() {
        // The pattern is evaluated against the window title, not the
        // executable name. Longstanding behavior profiles rely on.
        let condition = Condition {
            process_name: Some(Regex::new("notepad").unwrap()),
            ..Condition::default()
        };
        assert!(condition.matches("notepad session", None, Some("explorer.exe")));
        assert!(!condition.matches("some editor", None, Some("notepad.exe")));
    }

    #[test]
    fn test_process_name_pattern_can_target_the_executable() {
        let condition = Condition {
            process_name: Some(Regex::new("notepad").unwrap()),
            process_name_target: ProcessNameTarget::ExecutableName,
            ..Condition::default()
        };
        assert!(condition.matches("some editor", None, Some("notepad.exe")));
        assert!(!condition.matches("notepad session", None, Some("explorer.exe")));
        // An unresolved executable name fails the criterion.
        assert!(!condition.matches("notepad session", None, None));
    }

    #[test]
    fn test_all_criteria_must_pass() {
        let condition = Condition {
            window_title: Some(Regex::new("Notepad").unwrap()),
            pid: Some(7),
            ..Condition::default()
        };
        assert!(condition.matches("Untitled - Notepad", Some(7), None));
        assert!(!condition.matches("Untitled - Notepad", Some(8), None));
        assert!(!condition.matches("Calculator", Some(7), None));
    }

    #[test]
    fn test_wants_pid_and_executable_name() {
        assert!(!Condition::default().wants_pid());
        assert!(
            Condition {
                pid: Some(1),
                ..Condition::default()
            }
            .wants_pid()
        );

        let title_target = Condition {
            process_name: Some(Regex::new("x").unwrap()),
            ..Condition::default()
        };
        assert!(!title_target.wants_pid());
        assert!(!title_target.wants_executable_name());

        let exe_target = Condition {
            process_name: Some(Regex::new("x").unwrap()),
            process_name_target: ProcessNameTarget::ExecutableName,
            ..Condition::default()
        };
        assert!(exe_target.wants_pid());
        assert!(exe_target.wants_executable_name());
    }
}
