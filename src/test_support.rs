//! In-memory host and log capture shared by unit tests.

use crate::host::{Environment, FileSystem, WindowsSources};
use std::cell::Cell;
use std::collections::{HashMap, HashSet};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Fake machine: environment, files, drives and registry keys in memory.
#[derive(Debug, Default)]
pub(crate) struct FakeHost {
    env: HashMap<String, OsString>,
    dirs: HashSet<PathBuf>,
    files: HashSet<PathBuf>,
    drives: Vec<PathBuf>,
    registry_keys: HashSet<String>,
    fs_calls: Cell<usize>,
}

impl FakeHost {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.insert(key.to_string(), OsString::from(value));
        self
    }

    pub(crate) fn with_env_os(mut self, key: &str, value: impl Into<OsString>) -> Self {
        self.env.insert(key.to_string(), value.into());
        self
    }

    pub(crate) fn with_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.dirs.insert(dir.as_ref().to_path_buf());
        self
    }

    /// Adds `file` and marks its parent as an existing directory.
    pub(crate) fn with_file(mut self, file: impl AsRef<Path>) -> Self {
        let file = file.as_ref().to_path_buf();
        if let Some(parent) = file.parent() {
            self.dirs.insert(parent.to_path_buf());
        }
        self.files.insert(file);
        self
    }

    pub(crate) fn with_drive(mut self, root: impl AsRef<Path>) -> Self {
        self.drives.push(root.as_ref().to_path_buf());
        self
    }

    pub(crate) fn with_registry_key(mut self, key: &str) -> Self {
        self.registry_keys.insert(key.to_string());
        self
    }

    /// Number of filesystem queries made so far.
    pub(crate) fn fs_calls(&self) -> usize {
        self.fs_calls.get()
    }
}

impl Environment for FakeHost {
    fn var(&self, key: &str) -> Option<OsString> {
        self.env.get(key).cloned()
    }
}

impl FileSystem for FakeHost {
    fn is_dir(&self, path: &Path) -> bool {
        self.fs_calls.set(self.fs_calls.get() + 1);
        self.dirs.contains(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.fs_calls.set(self.fs_calls.get() + 1);
        self.files.contains(path)
    }
}

impl WindowsSources for FakeHost {
    fn fixed_drives(&self) -> Vec<PathBuf> {
        self.drives.clone()
    }

    fn local_machine_key_exists(&self, subkey: &str) -> bool {
        self.registry_keys.contains(subkey)
    }
}

struct WarnCounter(Arc<AtomicUsize>);

impl<S: tracing::Subscriber> Layer<S> for WarnCounter {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == tracing::Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Run `f` and return its output with the number of warnings it logged.
pub(crate) fn count_warnings<T>(f: impl FnOnce() -> T) -> (T, usize) {
    let count = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(WarnCounter(Arc::clone(&count)));
    let output = tracing::subscriber::with_default(subscriber, f);
    (output, count.load(Ordering::SeqCst))
}

/// Write an executable `#!/bin/sh` script named `name` into `dir`.
#[cfg(unix)]
pub(crate) fn write_stub(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}
