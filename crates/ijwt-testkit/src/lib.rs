//! Test utilities for ijwt
//!
//! Shared helpers used across the ijwt workspace: temporary directories,
//! an on-disk sample site, a shared mock HTTP server and environment
//! isolation.

pub mod env;
pub mod mock;
pub mod site;

pub use env::{ENV_LOCK, with_isolated_cache_dir};
pub use mock::{get_shared_mock_server, serve_site};
pub use site::{SAMPLE_RENDERED_BODY, SAMPLE_SITE, write_site};

use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the project root
///
/// # Panics
///
/// Panics if the current directory is unknown or `.tmp/` cannot be created
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-test code
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let workspace_root = std::env::current_dir()?;
    let tmp_base = workspace_root.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}
