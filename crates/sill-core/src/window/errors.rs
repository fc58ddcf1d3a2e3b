use crate::errors::SillError;

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("Window enumeration failed: {message}")]
    EnumerationFailed { message: String },

    #[error("Window query failed in {operation}: {message}")]
    QueryFailed {
        operation: &'static str,
        message: String,
    },

    #[error("Window placement failed: {message}")]
    ApplyFailed { message: String },
}

impl SillError for WindowError {
    fn error_code(&self) -> &'static str {
        match self {
            WindowError::EnumerationFailed { .. } => "WINDOW_ENUMERATION_FAILED",
            WindowError::QueryFailed { .. } => "WINDOW_QUERY_FAILED",
            WindowError::ApplyFailed { .. } => "WINDOW_APPLY_FAILED",
        }
    }
}
