//! Running a candidate with `--version`.

use crate::LocateError;
use std::future::Future;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// Text captured from a finished child process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    pub stdout: String,
    pub stderr: String,
}

impl CapturedOutput {
    pub fn new(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }
}

/// Launches a candidate executable and captures what it prints.
///
/// [`TokioRunner`] is the real implementation. Tests substitute their own
/// to exercise verification without spawning anything.
pub trait ProcessRunner {
    /// Run `program --version`, wait for it to exit and capture both streams.
    ///
    /// The exit status is not inspected. Implementations must return an
    /// error when the process cannot be started at all.
    fn run_version(
        &self,
        program: &Path,
        limit: Duration,
    ) -> impl Future<Output = Result<CapturedOutput, LocateError>> + Send;
}

/// [`ProcessRunner`] backed by `tokio::process`.
///
/// The child is started without a shell and with stdin closed. It is killed
/// if the timeout elapses.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioRunner;

/// `CREATE_NO_WINDOW`, keeps console programs from flashing a window.
#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

impl ProcessRunner for TokioRunner {
    async fn run_version(
        &self,
        program: &Path,
        limit: Duration,
    ) -> Result<CapturedOutput, LocateError> {
        let mut cmd = Command::new(program);
        cmd.arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        #[cfg(windows)]
        cmd.creation_flags(CREATE_NO_WINDOW);

        let output = timeout(limit, cmd.output())
            .await
            .map_err(|_| LocateError::Timeout {
                path: program.to_path_buf(),
                duration: limit,
            })?
            .map_err(|e| LocateError::launch(program, e))?;

        tracing::debug!(
            program = %program.display(),
            status = %output.status,
            "version check finished"
        );

        Ok(CapturedOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
