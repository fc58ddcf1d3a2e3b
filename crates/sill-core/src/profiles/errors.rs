use crate::errors::SillError;

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("Profiles file not found at '{path}'")]
    FileNotFound { path: String },

    #[error("Failed to read profiles file: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("Failed to parse profiles file: {message}")]
    Parse { message: String },

    #[error("Profiles file must contain a JSON array")]
    NotAnArray,

    #[error("No profile with id '{id}'")]
    NotFound { id: String },

    #[error("Profile field '{field}' is missing or not an object")]
    FieldNotObject { field: &'static str },

    #[error("Profile condition is empty")]
    ConditionEmpty,

    #[error("Profile field '{field}' must be a string")]
    FieldNotString { field: &'static str },

    #[error("Profile field '{field}' must be an integer")]
    FieldNotInteger { field: &'static str },

    #[error("Invalid regex in '{field}': {message}")]
    InvalidRegex {
        field: &'static str,
        message: String,
    },

    #[error("Profile field 'condition.pid' must be positive, got {pid}")]
    PidNotPositive { pid: i64 },

    #[error(
        "Profile field 'condition.processNameTarget' must be 'windowTitle' or 'executableName', got '{value}'"
    )]
    InvalidProcessNameTarget { value: String },
}

impl SillError for ProfileError {
    fn error_code(&self) -> &'static str {
        match self {
            ProfileError::FileNotFound { .. } => "PROFILE_FILE_NOT_FOUND",
            ProfileError::Io { .. } => "PROFILE_IO_ERROR",
            ProfileError::Parse { .. } => "PROFILE_PARSE_ERROR",
            ProfileError::NotAnArray => "PROFILE_NOT_AN_ARRAY",
            ProfileError::NotFound { .. } => "PROFILE_NOT_FOUND",
            ProfileError::FieldNotObject { .. } => "PROFILE_FIELD_NOT_OBJECT",
            ProfileError::ConditionEmpty => "PROFILE_CONDITION_EMPTY",
            ProfileError::FieldNotString { .. } => "PROFILE_FIELD_NOT_STRING",
            ProfileError::FieldNotInteger { .. } => "PROFILE_FIELD_NOT_INTEGER",
            ProfileError::InvalidRegex { .. } => "PROFILE_INVALID_REGEX",
            ProfileError::PidNotPositive { .. } => "PROFILE_PID_NOT_POSITIVE",
            ProfileError::InvalidProcessNameTarget { .. } => "PROFILE_INVALID_PROCESS_NAME_TARGET",
        }
    }

    fn is_user_error(&self) -> bool {
        !matches!(self, ProfileError::Io { .. })
    }
}
