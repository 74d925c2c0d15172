//! Resolve command - locate a file across the include directories

use super::runtime;
use crate::context::Context;
use crate::output;
use anyhow::{Result, anyhow};
use ijwt_core::{Engine, Fetch, FileStore};
use std::path::{Path, PathBuf};
use url::Url;

pub fn run(config: Option<&Path>, file: String, root: Option<PathBuf>) -> Result<()> {
    let ctx = Context::new(config)?;
    let rt = runtime()?;

    let url = match &root {
        Some(root) => rt.block_on(search(ctx.engine(ctx.dir_fetcher(root)?)?, &file)),
        None => rt.block_on(search(ctx.engine(ctx.http_fetcher()?)?, &file)),
    };

    match url {
        Some(url) => Ok(output::print_text(url.as_str())?),
        None => Err(anyhow!(
            "'{}' was not found in any of: {}",
            file,
            ctx.config.site.directories.join(", ")
        )),
    }
}

async fn search<F: Fetch>(engine: Engine<F, &FileStore>, file: &str) -> Option<Url> {
    engine.url_resolver(file).await
}
