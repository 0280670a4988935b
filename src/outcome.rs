//! Result types produced by detection and verification.

use regex::Regex;
use semver::Version;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Registry key whose presence marks a Python install on Windows.
pub const PYTHON_CORE_KEY: &str = r"SOFTWARE\Python\PythonCore";

/// Which detection stage produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum CandidateSource {
    /// A directory listed in `PATH`.
    PathVariable,
    /// A conventional Windows install directory on a local drive.
    InstallDirectory,
    /// A fixed Unix system directory (`/usr/bin`, `/usr/local/bin`, `/opt`).
    SystemDirectory,
    /// The `HKLM\SOFTWARE\Python\PythonCore` registry key.
    ///
    /// The reported path is the key itself, not an executable.
    RegistryMarker,
}

/// Outcome of a single detection attempt.
///
/// A path is present if and only if Python was found. The fields are
/// private so that invariant holds for every value.
///
/// # Example
///
/// ```rust
/// use python_locator::{CandidateSource, DetectionResult};
///
/// let result = DetectionResult::found("/usr/bin/python3", CandidateSource::SystemDirectory);
/// assert!(result.is_found());
/// assert!(result.is_executable_path());
///
/// let missing = DetectionResult::not_found();
/// assert!(missing.path().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectionResult {
    found: bool,
    path: Option<PathBuf>,
    source: Option<CandidateSource>,
}

impl DetectionResult {
    /// A positive result for `path`, matched by `source`.
    pub fn found(path: impl Into<PathBuf>, source: CandidateSource) -> Self {
        Self {
            found: true,
            path: Some(path.into()),
            source: Some(source),
        }
    }

    /// A negative result.
    pub fn not_found() -> Self {
        Self {
            found: false,
            path: None,
            source: None,
        }
    }

    pub fn is_found(&self) -> bool {
        self.found
    }

    /// The reported path, `None` when nothing was found.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The stage that matched, `None` when nothing was found.
    pub fn source(&self) -> Option<CandidateSource> {
        self.source
    }

    /// Whether [`path`](Self::path) names a file that can be launched.
    ///
    /// False for registry markers and negative results.
    pub fn is_executable_path(&self) -> bool {
        self.found && self.source != Some(CandidateSource::RegistryMarker)
    }
}

/// Outcome of running a candidate with `--version`.
///
/// `version` is only ever set when the output looked like Python and was
/// non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionCheckResult {
    looks_like_python: bool,
    raw_output: Option<String>,
    version: Option<String>,
}

impl VersionCheckResult {
    pub(crate) fn no_output() -> Self {
        Self {
            looks_like_python: false,
            raw_output: None,
            version: None,
        }
    }

    pub(crate) fn not_python(raw_output: String) -> Self {
        Self {
            looks_like_python: false,
            raw_output: Some(raw_output),
            version: None,
        }
    }

    pub(crate) fn python(raw_output: String, version: String) -> Self {
        Self {
            looks_like_python: true,
            raw_output: Some(raw_output),
            version: Some(version),
        }
    }

    pub fn looks_like_python(&self) -> bool {
        self.looks_like_python
    }

    /// The text the version was read from (stdout, or stderr as fallback).
    pub fn raw_output(&self) -> Option<&str> {
        self.raw_output.as_deref()
    }

    /// The version token, e.g. `"3.11.4"`.
    ///
    /// Taken verbatim from the banner, so unusual output can yield an odd
    /// or empty string.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Best-effort semantic version parsed from the raw output.
    ///
    /// Returns `None` unless the output looked like Python and contains a
    /// `major.minor.patch` triple. Pre-release suffixes such as `rc1` are
    /// ignored.
    pub fn semver(&self) -> Option<Version> {
        if !self.looks_like_python {
            return None;
        }
        static SEMVER_RE: OnceLock<Regex> = OnceLock::new();
        let re = SEMVER_RE
            .get_or_init(|| Regex::new(r"(\d+)\.(\d+)\.(\d+)").expect("Invalid regex pattern"));
        let caps = re.captures(self.raw_output.as_deref()?)?;
        Version::parse(caps.get(0)?.as_str()).ok()
    }
}
