//! Environment isolation utilities for testing

use std::path::Path;
use std::sync::Mutex;
use tempfile::TempDir;

/// Name of the variable overriding the store directory
const CACHE_DIR_ENV: &str = "IJWT_CACHE_DIR";

/// Static mutex to serialize tests that modify environment variables
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Run `f` with `IJWT_CACHE_DIR` pointing at a fresh temporary directory
///
/// The previous value is restored afterwards. `f` receives the directory.
pub fn with_isolated_cache_dir<F, R>(f: F) -> R
where
    F: FnOnce(&Path) -> R,
{
    let _guard = ENV_LOCK.lock().unwrap_or_else(|p| p.into_inner());

    let original = std::env::var(CACHE_DIR_ENV).ok();
    let cache_dir = TempDir::new().expect("Failed to create cache directory");

    // SAFETY: ENV_LOCK is held, no other test touches the environment
    unsafe {
        std::env::set_var(CACHE_DIR_ENV, cache_dir.path());
    }

    let result = f(cache_dir.path());

    // SAFETY: ENV_LOCK is still held
    unsafe {
        match original {
            Some(value) => std::env::set_var(CACHE_DIR_ENV, value),
            None => std::env::remove_var(CACHE_DIR_ENV),
        }
    }

    result
}
