//! Operating system family the locator branches on.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// The operating system family a detection runs against.
///
/// The locator never inspects the running host on its own; it branches only
/// on the `PlatformFamily` it was given. Use [`PlatformFamily::current`] for
/// the real host, or any variant to simulate another one.
///
/// # Example
///
/// ```rust
/// use python_locator::PlatformFamily;
///
/// assert_eq!(PlatformFamily::Windows.path_list_separator(), ';');
/// assert_eq!(PlatformFamily::Linux.path_list_separator(), ':');
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[non_exhaustive]
pub enum PlatformFamily {
    /// Microsoft Windows
    Windows,
    /// Linux distributions
    Linux,
    /// Apple macOS
    MacOs,
    /// Anything else (BSDs, wasm, ...)
    Other,
}

impl PlatformFamily {
    /// The family of the host this process is running on.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Other
        }
    }

    /// Separator between entries of a `PATH`-style list.
    pub fn path_list_separator(&self) -> char {
        match self {
            Self::Windows => ';',
            Self::Linux | Self::MacOs | Self::Other => ':',
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Windows => "Windows",
            Self::Linux => "Linux",
            Self::MacOs => "macOS",
            Self::Other => "Other",
        }
    }

    /// Iterator over all known families.
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }
}
