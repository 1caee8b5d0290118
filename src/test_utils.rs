#![expect(
    clippy::unwrap_used,
    reason = "Test utilities use .unwrap() for brevity"
)]

//! Shared test utilities for the overlay unit tests.
//!
//! This module provides common test infrastructure used across multiple test modules.
//! It is only compiled during testing (`#[cfg(test)]`).

use crate::config::manager::DATA_DIR_ENV;
use std::path::Path;
use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize tests that modify the data directory environment
/// variable. Tests that touch it run one at a time even when the harness runs
/// tests in parallel.
static DATA_DIR_LOCK: Mutex<()> = Mutex::new(());

/// Helper function to create a temporary test directory using tempfile.
/// Returns a `TempDir` that automatically cleans up when dropped.
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// RAII guard that points `FCU_OVERLAY_HOME` at a test directory and restores
/// the original value when dropped.
///
/// `std::env::set_var` is unsafe because other threads may read the
/// environment concurrently. The guard holds `DATA_DIR_LOCK` for its whole
/// lifetime, so only one test at a time reads or writes the variable, and the
/// original value is restored on drop even if the test panics.
pub struct DataDirGuard {
    original: Option<String>,
    // Held for the lifetime of the guard
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[expect(
    unsafe_code,
    reason = "Test-only code that modifies environment variables while holding DATA_DIR_LOCK"
)]
impl DataDirGuard {
    /// Point the data directory at the given temp directory
    pub fn new(temp_dir: &TempDir) -> Self {
        Self::with_path(temp_dir.path())
    }

    /// Point the data directory at an arbitrary path
    pub fn with_path(path: &Path) -> Self {
        // A panicking test poisons the lock; the protected data is `()`, so recover it
        let lock = DATA_DIR_LOCK
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let original = std::env::var(DATA_DIR_ENV).ok();
        // SAFETY: DATA_DIR_LOCK is held, so no other test reads or writes the
        // variable until this guard drops.
        unsafe {
            std::env::set_var(DATA_DIR_ENV, path);
        }
        Self {
            original,
            _lock: lock,
        }
    }
}

#[expect(
    unsafe_code,
    reason = "Test-only code that restores environment variables while holding DATA_DIR_LOCK"
)]
impl Drop for DataDirGuard {
    fn drop(&mut self) {
        // SAFETY: the lock is still held; see `with_path`.
        if let Some(ref original) = self.original {
            unsafe {
                std::env::set_var(DATA_DIR_ENV, original);
            }
        } else {
            unsafe {
                std::env::remove_var(DATA_DIR_ENV);
            }
        }
    }
}

/// Write a file inside a test directory and return its path
pub fn write_test_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}
