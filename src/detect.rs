//! Python detection and verification.

use crate::detection::{
    find_in_path_variable, interpret_output, search_fallback, ProcessRunner, TokioRunner,
};
use crate::host::{Environment, FileSystem, SystemHost, WindowsSources};
use crate::{
    CandidateSource, DetectionResult, LocateError, PlatformFamily, VerifyOptions,
    VersionCheckResult,
};
use std::path::Path;

/// Locates and verifies Python interpreters.
///
/// The host (environment, filesystem, Windows sources), the process runner
/// and the platform are all supplied by the caller, so the search can run
/// against a simulated machine. [`PythonLocator::system`] wires up the real
/// host.
///
/// # Example
///
/// ```rust,no_run
/// use python_locator::{PythonLocator, VerifyOptions};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let locator = PythonLocator::system();
///     let detected = locator.detect_python();
///     if let Some(path) = detected.path().filter(|_| detected.is_executable_path()) {
///         let check = locator
///             .verify_python(path, &VerifyOptions::default())
///             .await
///             .expect("python could not be launched");
///         println!("{:?} -> {:?}", path, check.version());
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct PythonLocator<H = SystemHost, R = TokioRunner> {
    host: H,
    runner: R,
    platform: PlatformFamily,
}

impl PythonLocator<SystemHost, TokioRunner> {
    /// Locator for the machine this process runs on.
    pub fn system() -> Self {
        Self::new(SystemHost, TokioRunner, PlatformFamily::current())
    }
}

impl Default for PythonLocator<SystemHost, TokioRunner> {
    fn default() -> Self {
        Self::system()
    }
}

impl<H, R> PythonLocator<H, R> {
    pub fn new(host: H, runner: R, platform: PlatformFamily) -> Self {
        Self {
            host,
            runner,
            platform,
        }
    }

    /// The platform this locator searches as.
    pub fn platform(&self) -> PlatformFamily {
        self.platform
    }
}

impl<H, R> PythonLocator<H, R>
where
    H: Environment + FileSystem + WindowsSources,
{
    /// Find an installed Python without running it.
    ///
    /// # Detection Process
    ///
    /// 1. Each `PATH` directory, checking `python` then `python3`
    /// 2. Only if that found nothing, the platform fallback:
    ///    - Windows: conventional install directories on every fixed drive
    ///      (`python.exe`, `python3.exe`), then the `PythonCore` registry key
    ///    - Linux / macOS: `/usr/bin`, `/usr/local/bin`, `/opt`
    ///    - Other: nothing
    ///
    /// The first match wins. Missing directories are logged and skipped.
    pub fn detect_python(&self) -> DetectionResult {
        if let Some(path) = find_in_path_variable(&self.host, &self.host, self.platform) {
            tracing::debug!(path = %path.display(), "python found on PATH");
            return DetectionResult::found(path, CandidateSource::PathVariable);
        }

        let result = search_fallback(&self.host, &self.host, &self.host, self.platform);
        tracing::debug!(
            platform = self.platform.display_name(),
            found = result.is_found(),
            "fallback search finished"
        );
        result
    }
}

impl<H, R> PythonLocator<H, R>
where
    R: ProcessRunner,
{
    /// Run `executable --version` and check whether it looks like Python.
    ///
    /// # Errors
    ///
    /// Fails when the executable cannot be launched or does not exit within
    /// `options.timeout`. Output that is empty or unrelated is not an error;
    /// it yields a result with `looks_like_python() == false`.
    pub async fn verify_python(
        &self,
        executable: impl AsRef<Path>,
        options: &VerifyOptions,
    ) -> Result<VersionCheckResult, LocateError> {
        let executable = executable.as_ref();
        let output = self
            .runner
            .run_version(executable, options.timeout)
            .await?;
        let result = interpret_output(&output);
        tracing::debug!(
            executable = %executable.display(),
            looks_like_python = result.looks_like_python(),
            version = ?result.version(),
            "verification finished"
        );
        Ok(result)
    }
}

impl<H, R> PythonLocator<H, R>
where
    H: Environment + FileSystem + WindowsSources,
    R: ProcessRunner,
{
    /// Detect, then verify the match if it is a launchable file.
    ///
    /// The verification is `None` when nothing was found or when the match
    /// is only a registry marker.
    pub async fn detect_and_verify(
        &self,
        options: &VerifyOptions,
    ) -> Result<(DetectionResult, Option<VersionCheckResult>), LocateError> {
        let detected = self.detect_python();
        let verified = match detected.path() {
            Some(path) if detected.is_executable_path() => {
                Some(self.verify_python(path, options).await?)
            }
            _ => None,
        };
        Ok((detected, verified))
    }
}

/// Detect Python on the current machine.
///
/// Shorthand for `PythonLocator::system().detect_python()`.
pub fn detect_python() -> DetectionResult {
    PythonLocator::system().detect_python()
}

/// Verify `executable` on the current machine with default options.
pub async fn verify_python(
    executable: impl AsRef<Path>,
) -> Result<VersionCheckResult, LocateError> {
    PythonLocator::system()
        .verify_python(executable, &VerifyOptions::default())
        .await
}
