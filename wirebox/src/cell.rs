//! Storage cells referenced by generated resolvers.
//!
//! [`SingletonCell`] backs singleton directives: a process-wide slot whose
//! initializer runs at most once, delegated to [`std::sync::OnceLock`] —
//! first concurrent access is serialized by that primitive, not here.
//! [`MockCell`] backs the debug-only override hooks: a slot tests fill and
//! clear around otherwise-sequential execution. Concurrent mutation of an
//! override is not a supported pattern.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};
use tracing::debug;

/// Lazily-initialized shared storage for one singleton directive.
pub struct SingletonCell<T> {
    cell: OnceLock<T>,
}

impl<T> SingletonCell<T> {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }
}

impl<T: Clone> SingletonCell<T> {
    /// Returns the shared instance, running `init` on first access only.
    /// The instance lives for the rest of the process; there is no teardown.
    pub fn get_or_init<F: FnOnce() -> T>(&self, init: F) -> T {
        self.cell
            .get_or_init(|| {
                debug!("initializing singleton instance");
                init()
            })
            .clone()
    }
}

impl<T> Default for SingletonCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Debug-only override storage for one directive.
pub struct MockCell<T> {
    slot: Mutex<Option<T>>,
}

impl<T> MockCell<T> {
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Installs or clears the override.
    pub fn set(&self, value: Option<T>) {
        debug!(installed = value.is_some(), "updating mock override");
        *self.lock() = value;
    }

    /// Returns the current override slot. The guard is held only for the
    /// duration of the check-then-call in a generated resolver.
    pub fn get(&self) -> MutexGuard<'_, Option<T>> {
        self.lock()
    }

    // Override storage outlives any panicking test that held it; absorb
    // poisoning instead of propagating it into unrelated tests.
    fn lock(&self) -> MutexGuard<'_, Option<T>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Default for MockCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn singleton_initializer_runs_once() {
        let cell = SingletonCell::new();
        let runs = AtomicUsize::new(0);

        let first = cell.get_or_init(|| {
            runs.fetch_add(1, Ordering::SeqCst);
            "shared".to_string()
        });
        let second = cell.get_or_init(|| {
            runs.fetch_add(1, Ordering::SeqCst);
            "never".to_string()
        });

        assert_eq!(first, "shared");
        assert_eq!(second, "shared");
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn mock_cell_set_and_clear() {
        let cell = MockCell::new();
        assert!(cell.get().is_none());

        cell.set(Some(7));
        assert_eq!(*cell.get(), Some(7));

        cell.set(None);
        assert!(cell.get().is_none());
    }
}
