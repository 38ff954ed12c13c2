use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Sets (or removes, for `None`) environment variables and restores the
/// previous values on drop. Callers must be `#[serial]`.
pub(crate) struct EnvGuard {
    saved: Vec<(String, Option<OsString>)>,
}

impl EnvGuard {
    pub(crate) fn set(vars: &[(&str, Option<&str>)]) -> Self {
        let vars: Vec<(&str, Option<&OsStr>)> = vars
            .iter()
            .map(|(name, value)| (*name, value.map(OsStr::new)))
            .collect();
        Self::set_os(&vars)
    }

    /// Like `set`, for values that need not be valid UTF-8.
    pub(crate) fn set_os(vars: &[(&str, Option<&OsStr>)]) -> Self {
        let mut saved = Vec::with_capacity(vars.len());
        for (name, value) in vars {
            saved.push((name.to_string(), std::env::var_os(name)));
            // SAFETY: tests touching the environment run under #[serial].
            unsafe {
                match value {
                    Some(value) => std::env::set_var(name, value),
                    None => std::env::remove_var(name),
                }
            }
        }
        Self { saved }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (name, value) in self.saved.drain(..).rev() {
            // SAFETY: see EnvGuard::set.
            unsafe {
                match value {
                    Some(value) => std::env::set_var(&name, value),
                    None => std::env::remove_var(&name),
                }
            }
        }
    }
}

/// Write a `template.j2` into `dir` and return its path.
pub(crate) fn write_template(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("template.j2");
    fs::write(&path, content).unwrap();
    path
}
