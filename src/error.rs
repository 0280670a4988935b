//! Error types for locating and verifying a Python interpreter.
//!
//! Only conditions the caller must act on are errors. A missing directory,
//! an absent registry key or a silent child process are "not found"
//! outcomes, not errors.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors returned by the locator.
///
/// # Example
///
/// ```rust
/// use python_locator::LocateError;
///
/// fn report(error: &LocateError) {
///     eprintln!("{} ({})", error, error.description());
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LocateError {
    /// A probe was handed an empty or whitespace-only directory.
    ///
    /// This is a caller bug, raised before any filesystem access.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the argument.
        message: String,
    },

    /// The candidate executable could not be started.
    #[error("Failed to launch {}: {source}", .path.display())]
    Launch {
        /// Path that was launched.
        path: PathBuf,
        /// Underlying I/O error from the spawn.
        #[source]
        source: std::io::Error,
    },

    /// The candidate exists but may not be executed by this user.
    #[error("Permission denied launching {}", .path.display())]
    PermissionDenied {
        /// Path that was launched.
        path: PathBuf,
    },

    /// The candidate did not exit within the configured timeout.
    ///
    /// The child process is killed before this is returned.
    #[error("{} --version did not exit within {duration:?}", .path.display())]
    Timeout {
        /// Path that was launched.
        path: PathBuf,
        /// How long the process was allowed to run.
        duration: Duration,
    },
}

impl LocateError {
    /// Short, static description of the error category.
    pub fn description(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "Invalid argument",
            Self::Launch { .. } => "Failed to launch executable",
            Self::PermissionDenied { .. } => "Permission denied",
            Self::Timeout { .. } => "Version check timed out",
        }
    }

    pub(crate) fn launch(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::PermissionDenied {
            Self::PermissionDenied { path }
        } else {
            Self::Launch { path, source }
        }
    }
}
