use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish a resource that failed to
/// load from a misconfigured invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The resource was loaded completely
    Success = 0,
    /// Loading started but the resource could not be read to the end
    LoadFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (missing file, bad config, ...)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::LoadFailed => write!(f, "Load Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for resource loading.
#[derive(Debug, Error)]
pub enum LoadStatusError {
    #[error("Resource not found: {path}\n\n💡 Hint: Please verify the path, or pass '-' to read from stdin")]
    ResourceNotFound { path: PathBuf },

    #[error("Failed to open resource: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    ResourceOpenError { path: PathBuf, details: String },

    /// Raised after `on_start` when the stream breaks mid-load
    #[error("Failed to read {resource} after {bytes_read} bytes\nDetails: {source}")]
    ReadFailed {
        resource: String,
        bytes_read: u64,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {message}\n\n💡 Hint: {hint}")]
    InvalidConfig { message: String, hint: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    #[error("Failed to install global tracing subscriber: {0}")]
    LoggingInit(#[source] tracing::subscriber::SetGlobalDefaultError),
}

impl LoadStatusError {
    /// Exit code the CLI should use for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            LoadStatusError::ReadFailed { .. } => ExitCode::LoadFailed,
            _ => ExitCode::ApplicationError,
        }
    }
}
