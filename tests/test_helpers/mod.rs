//! Scoped process-environment overrides for integration tests.

use std::env;
use std::ffi::OsString;
use std::sync::{Mutex, MutexGuard, PoisonError};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Restores the touched variables when dropped.
///
/// Holding the guard also holds a process-wide lock, so tests that read or
/// write the environment run one at a time.
pub struct EnvVarGuard {
    saved: Vec<(String, Option<OsString>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvVarGuard {
    /// Applies `changes`: `Some` sets a variable, `None` removes it.
    pub fn apply(changes: &[(&str, Option<&str>)]) -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let saved = changes
            .iter()
            .map(|(key, value)| {
                let previous = env::var_os(key);
                write_var(key, *value);
                ((*key).to_owned(), previous)
            })
            .collect();
        Self { saved, _lock: lock }
    }

    /// Sets the variables in `set` and removes every other key in `keys`.
    pub fn only(keys: &[&str], set: &[(&str, &str)]) -> Self {
        let changes: Vec<(&str, Option<&str>)> = keys
            .iter()
            .map(|key| {
                let value = set
                    .iter()
                    .find(|(candidate, _)| candidate == key)
                    .map(|(_, value)| *value);
                (*key, value)
            })
            .collect();
        Self::apply(&changes)
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        for (key, previous) in self.saved.drain(..).rev() {
            // SAFETY: ENV_LOCK is held until the guard is dropped.
            unsafe {
                match previous {
                    Some(value) => env::set_var(&key, value),
                    None => env::remove_var(&key),
                }
            }
        }
    }
}

fn write_var(key: &str, value: Option<&str>) {
    // SAFETY: callers hold ENV_LOCK.
    unsafe {
        match value {
            Some(new_value) => env::set_var(key, new_value),
            None => env::remove_var(key),
        }
    }
}
