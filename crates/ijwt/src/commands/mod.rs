//! CLI command implementations

pub mod cache;
pub mod qualify;
pub mod render;
pub mod resolve;

use anyhow::{Context, Result};
use tokio::runtime::Runtime;

/// Runtime driving the (non-`Send`) engine with `block_on`
pub(crate) fn runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")
}
