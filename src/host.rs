//! Capabilities the locator reads the host through.
//!
//! Detection only ever touches the machine through these traits, so the
//! search order can be exercised against in-memory fakes. [`SystemHost`]
//! implements all of them for the real host.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Read access to environment variables.
pub trait Environment {
    /// Value of `key`, or `None` when unset.
    fn var(&self, key: &str) -> Option<OsString>;
}

/// Read-only filesystem existence checks.
pub trait FileSystem {
    fn is_dir(&self, path: &Path) -> bool;
    fn is_file(&self, path: &Path) -> bool;
}

/// Windows-only sources of truth.
///
/// On other hosts [`SystemHost`] reports no drives and no keys.
pub trait WindowsSources {
    /// Root paths (e.g. `C:\`) of fixed local drives that are ready.
    fn fixed_drives(&self) -> Vec<PathBuf>;

    /// Whether `subkey` exists under `HKEY_LOCAL_MACHINE`.
    fn local_machine_key_exists(&self, subkey: &str) -> bool;
}

/// The running machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

impl Environment for SystemHost {
    fn var(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

impl FileSystem for SystemHost {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

#[cfg(windows)]
impl WindowsSources for SystemHost {
    fn fixed_drives(&self) -> Vec<PathBuf> {
        use windows_sys::Win32::Storage::FileSystem::{GetDriveTypeW, GetLogicalDrives};

        // `DRIVE_FIXED` from winbase.h
        const DRIVE_FIXED: u32 = 3;

        // SAFETY: takes no arguments and returns a bitmask of drive letters.
        let mask = unsafe { GetLogicalDrives() };

        (0..26u8)
            .filter(|&bit| mask & (1u32 << bit) != 0)
            .map(|bit| format!("{}:\\", (b'A' + bit) as char))
            .filter(|root| {
                let wide: Vec<u16> = root.encode_utf16().chain(std::iter::once(0)).collect();
                // SAFETY: `wide` is NUL-terminated and outlives the call.
                unsafe { GetDriveTypeW(wide.as_ptr()) == DRIVE_FIXED }
            })
            .map(PathBuf::from)
            // Fixed but not ready, e.g. an unformatted volume.
            .filter(|root| root.is_dir())
            .collect()
    }

    fn local_machine_key_exists(&self, subkey: &str) -> bool {
        use winreg::enums::HKEY_LOCAL_MACHINE;
        use winreg::RegKey;

        RegKey::predef(HKEY_LOCAL_MACHINE)
            .open_subkey(subkey)
            .is_ok()
    }
}

#[cfg(not(windows))]
impl WindowsSources for SystemHost {
    fn fixed_drives(&self) -> Vec<PathBuf> {
        Vec::new()
    }

    fn local_machine_key_exists(&self, _subkey: &str) -> bool {
        false
    }
}
