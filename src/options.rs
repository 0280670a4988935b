//! Verification options.
//!
//! This module provides the [`VerifyOptions`] struct for configuring how a
//! candidate interpreter is launched during verification.

use std::time::Duration;

/// Configuration options for verification.
///
/// # Default Behavior
///
/// The default timeout is 5 seconds. A real interpreter answers `--version`
/// in milliseconds; the limit only matters for a candidate that hangs.
///
/// # Example
///
/// ```rust
/// use python_locator::VerifyOptions;
/// use std::time::Duration;
///
/// let opts = VerifyOptions::default();
/// assert_eq!(opts.timeout, Duration::from_secs(5));
///
/// let opts = VerifyOptions {
///     timeout: Duration::from_secs(30),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct VerifyOptions {
    /// Maximum time to wait for `--version` to exit.
    ///
    /// When exceeded the child is killed and verification fails with
    /// `LocateError::Timeout`.
    ///
    /// Default: 5 seconds
    pub timeout: Duration,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
        }
    }
}
