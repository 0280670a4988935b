//! # python-locator
//!
//! Find an installed Python interpreter and confirm it really is one.
//!
//! Detection walks an ordered list of sources and stops at the first hit:
//! the directories in `PATH`, then platform-specific fallbacks
//! (conventional install directories and the `PythonCore` registry key on
//! Windows, `/usr/bin`, `/usr/local/bin` and `/opt` on Linux and macOS).
//! Verification runs a candidate with `--version` and reads the banner.
//!
//! ## Features
//!
//! - [`detect_python`] / [`PythonLocator::detect_python`]: locate without executing
//! - [`verify_python`] / [`PythonLocator::verify_python`]: run `--version` with a timeout
//! - [`PythonLocator::detect_and_verify`]: both in one call
//! - [`Environment`], [`FileSystem`], [`WindowsSources`] and [`ProcessRunner`]
//!   capabilities for running the search against a simulated host
//!
//! ## Example
//!
//! ```rust,no_run
//! use python_locator::{detect_python, verify_python};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let detected = detect_python();
//!     match detected.path() {
//!         Some(path) if detected.is_executable_path() => {
//!             match verify_python(path).await {
//!                 Ok(check) => println!("{:?}: {:?}", path, check.version()),
//!                 Err(e) => eprintln!("could not run {:?}: {}", path, e),
//!             }
//!         }
//!         Some(marker) => println!("Python is registered at {:?}", marker),
//!         None => println!("Python not found"),
//!     }
//! }
//! ```

mod detect;
mod detection;
mod error;
mod host;
mod options;
mod outcome;
mod platform;

#[cfg(test)]
mod test_support;

pub use detect::{detect_python, verify_python, PythonLocator};
pub use detection::{last_token_version, CapturedOutput, ProcessRunner, TokioRunner};
pub use error::LocateError;
pub use host::{Environment, FileSystem, SystemHost, WindowsSources};
pub use options::VerifyOptions;
pub use outcome::{CandidateSource, DetectionResult, VersionCheckResult, PYTHON_CORE_KEY};
pub use platform::PlatformFamily;
