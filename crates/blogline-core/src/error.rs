//! Error types and exit codes for blogline
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (including storage write failures)
//! - 2: Usage error (bad flags/args)
//! - 3: Data/site error (missing site, unknown channel or post)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

use crate::content::ContentId;

/// Exit codes for the blogline CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/site error - missing site, unknown content (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<rusqlite::Error> for BloglineError {
    fn from(err: rusqlite::Error) -> Self {
        BloglineError::Other(err.to_string())
    }
}

/// Errors that can occur during blogline operations
#[derive(Error, Debug)]
pub enum BloglineError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data/site errors (exit code 3)
    #[error("site not found (searched from {search_root:?})")]
    SiteNotFound { search_root: PathBuf },

    #[error("invalid site: {reason}")]
    InvalidSite { reason: String },

    #[error("channel not found: {id}")]
    ChannelNotFound { id: ContentId },

    #[error("post not found: {id}")]
    PostNotFound { id: ContentId },

    // Generic failures (exit code 1)
    /// Persisting an entity failed. Never retried by the core.
    #[error("failed to save content {id}: {reason}")]
    StorageWrite { id: ContentId, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl BloglineError {
    /// Create an error for a failed database operation
    pub fn db_operation(operation: &str, error: impl std::fmt::Display) -> Self {
        BloglineError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for a failed entity save
    pub fn storage_write(id: ContentId, error: impl std::fmt::Display) -> Self {
        BloglineError::StorageWrite {
            id,
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        BloglineError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            BloglineError::UsageError(_)
            | BloglineError::InvalidValue { .. } => ExitCode::Usage,

            BloglineError::SiteNotFound { .. }
            | BloglineError::InvalidSite { .. }
            | BloglineError::ChannelNotFound { .. }
            | BloglineError::PostNotFound { .. } => ExitCode::Data,

            BloglineError::StorageWrite { .. }
            | BloglineError::Io(_)
            | BloglineError::Json(_)
            | BloglineError::Toml(_)
            | BloglineError::FailedOperation { .. }
            | BloglineError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            BloglineError::UsageError(_) => "usage_error",
            BloglineError::InvalidValue { .. } => "invalid_value",
            BloglineError::SiteNotFound { .. } => "site_not_found",
            BloglineError::InvalidSite { .. } => "invalid_site",
            BloglineError::ChannelNotFound { .. } => "channel_not_found",
            BloglineError::PostNotFound { .. } => "post_not_found",
            BloglineError::StorageWrite { .. } => "storage_write",
            BloglineError::Io(_) => "io_error",
            BloglineError::Json(_) => "json_error",
            BloglineError::Toml(_) => "toml_error",
            BloglineError::FailedOperation { .. } => "failed_operation",
            BloglineError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for blogline operations
pub type Result<T> = std::result::Result<T, BloglineError>;
