//! Profile lookup and validation.
//!
//! Profiles live in a JSON array; lookup is by exact id. Only the selected
//! record is validated, so unrelated malformed entries in the same file do
//! not block a run.

use std::path::{Path, PathBuf};

use regex::Regex;
use serde_json::{Map, Value};
use tracing::info;

use super::errors::ProfileError;
use super::types::{Condition, ProcessNameTarget, Profile};
use crate::window::types::Placement;

pub const PROFILES_FILE_NAME: &str = "profiles.json";

/// Default profiles location: next to the current executable.
pub fn default_profiles_path() -> Result<PathBuf, ProfileError> {
    let exe = std::env::current_exe()?;
    Ok(match exe.parent() {
        Some(dir) => dir.join(PROFILES_FILE_NAME),
        None => PathBuf::from(PROFILES_FILE_NAME),
    })
}

/// Load and validate the profile with the given id.
pub fn load_profile(path: &Path, id: &str) -> Result<Profile, ProfileError> {
    info!(
        event = "core.profile.load_started",
        path = %path.display(),
        id = id
    );

    if !path.exists() {
        return Err(ProfileError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    let document: Value = serde_json::from_str(&content).map_err(|e| ProfileError::Parse {
        message: e.to_string(),
    })?;
    let records = document.as_array().ok_or(ProfileError::NotAnArray)?;

    let record = records
        .iter()
        .find(|record| record.get("id").and_then(Value::as_str) == Some(id))
        .ok_or_else(|| ProfileError::NotFound { id: id.to_string() })?;

    let profile = Profile {
        id: id.to_string(),
        condition: parse_condition(record.get("condition"))?,
        pos: parse_placement(record.get("pos"))?,
    };

    info!(event = "core.profile.load_completed", id = id);
    Ok(profile)
}

fn parse_condition(value: Option<&Value>) -> Result<Condition, ProfileError> {
    let object = value
        .and_then(Value::as_object)
        .ok_or(ProfileError::FieldNotObject { field: "condition" })?;
    if object.is_empty() {
        return Err(ProfileError::ConditionEmpty);
    }

    let window_title = parse_pattern(object.get("windowTitle"), "condition.windowTitle")?;
    let process_name = parse_pattern(object.get("processName"), "condition.processName")?;

    let pid = match object.get("pid") {
        None => None,
        Some(value) => {
            let pid = value
                .as_i64()
                .ok_or(ProfileError::FieldNotInteger { field: "condition.pid" })?;
            if pid <= 0 {
                return Err(ProfileError::PidNotPositive { pid });
            }
            let pid = u32::try_from(pid)
                .map_err(|_| ProfileError::FieldNotInteger { field: "condition.pid" })?;
            Some(pid)
        }
    };

    let process_name_target = match object.get("processNameTarget") {
        None => ProcessNameTarget::default(),
        Some(value) => {
            let value = value.as_str().ok_or(ProfileError::FieldNotString {
                field: "condition.processNameTarget",
            })?;
            match value {
                "windowTitle" => ProcessNameTarget::WindowTitle,
                "executableName" => ProcessNameTarget::ExecutableName,
                other => {
                    return Err(ProfileError::InvalidProcessNameTarget {
                        value: other.to_string(),
                    });
                }
            }
        }
    };

    Ok(Condition {
        window_title,
        process_name,
        pid,
        process_name_target,
    })
}

fn parse_pattern(
    value: Option<&Value>,
    field: &'static str,
) -> Result<Option<Regex>, ProfileError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let pattern = value
        .as_str()
        .ok_or(ProfileError::FieldNotString { field })?;
    let regex = Regex::new(pattern).map_err(|e| ProfileError::InvalidRegex {
        field,
        message: e.to_string(),
    })?;
    Ok(Some(regex))
}

fn parse_placement(value: Option<&Value>) -> Result<Placement, ProfileError> {
    let object = value
        .and_then(Value::as_object)
        .ok_or(ProfileError::FieldNotObject { field: "pos" })?;
    Ok(Placement {
        x: integer_field(object, "x", "pos.x")?,
        y: integer_field(object, "y", "pos.y")?,
        width: integer_field(object, "width", "pos.width")?,
        height: integer_field(object, "height", "pos.height")?,
    })
}

fn integer_field(
    object: &Map<String, Value>,
    key: &str,
    field: &'static str,
) -> Result<i32, ProfileError> {
    let value = object
        .get(key)
        .and_then(Value::as_i64)
        .ok_or(ProfileError::FieldNotInteger { field })?;
    i32::try_from(value).map_err(|_| ProfileError::FieldNotInteger { field })
}
