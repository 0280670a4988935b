//! Platform-specific locations searched when `PATH` has no Python.

use super::path_finder::{find_in_directories, probe_directory, UNIX_NAMES, WINDOWS_NAMES};
use crate::host::{Environment, FileSystem, WindowsSources};
use crate::{CandidateSource, DetectionResult, PlatformFamily, PYTHON_CORE_KEY};
use std::path::{Path, PathBuf};

/// Unix directories probed after `PATH`, in order.
pub(crate) const UNIX_SYSTEM_DIRS: &[&str] = &["/usr/bin", "/usr/local/bin", "/opt"];

/// Run the fallback search for `platform`.
pub(crate) fn search<E, F, W>(
    env: &E,
    fs: &F,
    windows: &W,
    platform: PlatformFamily,
) -> DetectionResult
where
    E: Environment + ?Sized,
    F: FileSystem + ?Sized,
    W: WindowsSources + ?Sized,
{
    match platform {
        PlatformFamily::Windows => search_windows(env, fs, windows),
        PlatformFamily::Linux | PlatformFamily::MacOs => {
            match find_in_directories(fs, UNIX_SYSTEM_DIRS, UNIX_NAMES) {
                Some(path) => DetectionResult::found(path, CandidateSource::SystemDirectory),
                None => DetectionResult::not_found(),
            }
        }
        PlatformFamily::Other => {
            tracing::debug!("no fallback locations for this platform");
            DetectionResult::not_found()
        }
    }
}

/// Conventional install directories for one drive, in probe order.
///
/// Profile-relative entries are left out when no user profile is known.
pub(crate) fn install_directories(drive: &Path, profile: Option<&Path>) -> Vec<PathBuf> {
    let local_app_data = profile.map(|p| p.join("AppData").join("Local"));

    let mut dirs = vec![drive.join("Python")];
    if let Some(local) = &local_app_data {
        dirs.push(local.join("Programs").join("Python"));
    }
    dirs.push(drive.join("Program Files").join("Python"));
    dirs.push(drive.join("Program Files (x86)").join("Python"));
    if let Some(local) = &local_app_data {
        dirs.push(local.join("Microsoft").join("WindowsApps"));
    }
    dirs
}

fn search_windows<E, F, W>(env: &E, fs: &F, windows: &W) -> DetectionResult
where
    E: Environment + ?Sized,
    F: FileSystem + ?Sized,
    W: WindowsSources + ?Sized,
{
    let profile = env
        .var("USERPROFILE")
        .filter(|value| !value.to_string_lossy().trim().is_empty())
        .map(PathBuf::from);

    let drives = windows.fixed_drives();
    if drives.is_empty() {
        tracing::warn!("no fixed drives could be enumerated");
    }

    for drive in &drives {
        for dir in install_directories(drive, profile.as_deref()) {
            if let Ok(Some(path)) = probe_directory(fs, &dir, WINDOWS_NAMES) {
                return DetectionResult::found(path, CandidateSource::InstallDirectory);
            }
        }
    }

    if windows.local_machine_key_exists(PYTHON_CORE_KEY) {
        tracing::debug!(key = PYTHON_CORE_KEY, "python registry key present");
        return DetectionResult::found(PYTHON_CORE_KEY, CandidateSource::RegistryMarker);
    }

    DetectionResult::not_found()
}
