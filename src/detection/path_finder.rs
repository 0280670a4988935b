//! Directory probing and `PATH` scanning.

use crate::host::{Environment, FileSystem};
use crate::{LocateError, PlatformFamily};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Executable names probed in `PATH` and Unix system directories, in
/// preference order.
pub(crate) const UNIX_NAMES: &[&str] = &["python", "python3"];

/// Executable names probed in Windows install directories.
pub(crate) const WINDOWS_NAMES: &[&str] = &["python.exe", "python3.exe"];

/// Probe a single directory for the first of `names` that exists in it.
///
/// Only direct children are checked; there is no recursion and no
/// extension resolution.
///
/// # Errors
///
/// `LocateError::InvalidArgument` if `dir` is empty or whitespace-only.
/// The filesystem is not consulted in that case.
///
/// A directory that does not exist is not an error: it logs one warning and
/// yields `Ok(None)`.
pub(crate) fn probe_directory<F>(
    fs: &F,
    dir: &Path,
    names: &[&str],
) -> Result<Option<PathBuf>, LocateError>
where
    F: FileSystem + ?Sized,
{
    if dir.as_os_str().to_string_lossy().trim().is_empty() {
        return Err(LocateError::InvalidArgument {
            message: "directory to probe must not be empty".to_string(),
        });
    }

    if !fs.is_dir(dir) {
        tracing::warn!(dir = %dir.display(), "directory does not exist, skipping");
        return Ok(None);
    }

    for name in names {
        let candidate = dir.join(name);
        if fs.is_file(&candidate) {
            tracing::debug!(candidate = %candidate.display(), "found python candidate");
            return Ok(Some(candidate));
        }
    }

    Ok(None)
}

/// Split a `PATH` value on the platform separator, dropping blank entries.
///
/// Works on the raw `OsStr` so entries that are not valid Unicode survive
/// unchanged.
pub(crate) fn split_path_list(value: &OsStr, platform: PlatformFamily) -> Vec<PathBuf> {
    split_os_str(value, platform.path_list_separator())
        .into_iter()
        .filter(|entry| !entry.to_string_lossy().trim().is_empty())
        .map(PathBuf::from)
        .collect()
}

#[cfg(unix)]
fn split_os_str(value: &OsStr, separator: char) -> Vec<OsString> {
    use std::os::unix::ffi::OsStrExt;

    // Separators are ASCII, so a byte split never cuts a character.
    let separator = separator as u8;
    value
        .as_bytes()
        .split(|b| *b == separator)
        .map(|piece| OsStr::from_bytes(piece).to_os_string())
        .collect()
}

#[cfg(windows)]
fn split_os_str(value: &OsStr, separator: char) -> Vec<OsString> {
    use std::os::windows::ffi::{OsStrExt, OsStringExt};

    let separator = separator as u16;
    let wide: Vec<u16> = value.encode_wide().collect();
    wide.split(|unit| *unit == separator)
        .map(OsString::from_wide)
        .collect()
}

#[cfg(not(any(unix, windows)))]
fn split_os_str(value: &OsStr, separator: char) -> Vec<OsString> {
    value
        .to_string_lossy()
        .split(separator)
        .map(OsString::from)
        .collect()
}

/// Scan every directory in `PATH` for `python`, then `python3`.
pub(crate) fn find_in_path_variable<E, F>(
    env: &E,
    fs: &F,
    platform: PlatformFamily,
) -> Option<PathBuf>
where
    E: Environment + ?Sized,
    F: FileSystem + ?Sized,
{
    let Some(value) = env.var("PATH") else {
        tracing::debug!("PATH is not set");
        return None;
    };

    let dirs = split_path_list(&value, platform);
    find_in_directories(fs, &dirs, UNIX_NAMES)
}

/// Probe `dirs` in order, returning the first match.
///
/// Blank entries are skipped rather than handed to the probe.
pub(crate) fn find_in_directories<F, P>(fs: &F, dirs: &[P], names: &[&str]) -> Option<PathBuf>
where
    F: FileSystem + ?Sized,
    P: AsRef<Path>,
{
    dirs.iter()
        .map(|dir| AsRef::<Path>::as_ref(dir))
        .filter(|dir| !dir.as_os_str().to_string_lossy().trim().is_empty())
        .find_map(|dir| probe_directory(fs, dir, names).ok().flatten())
}
