//! Render command - assemble a page

use super::runtime;
use crate::context::Context;
use crate::output;
use anyhow::{Context as _, Result};
use colored::Colorize;
use ijwt_core::{Engine, Fetch, FileStore};
use std::path::{Path, PathBuf};

pub fn run(
    config: Option<&Path>,
    page: Option<String>,
    root: Option<PathBuf>,
    out: Option<PathBuf>,
) -> Result<()> {
    let ctx = Context::new(config)?;
    let page = page.unwrap_or_else(|| ctx.config.site.index.clone());
    let rt = runtime()?;

    let html = match &root {
        Some(root) => rt.block_on(render(ctx.engine(ctx.dir_fetcher(root)?)?, &page))?,
        None => rt.block_on(render(ctx.engine(ctx.http_fetcher()?)?, &page))?,
    };

    match out {
        Some(path) => {
            std::fs::write(&path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "{} Rendered {} → {}",
                "✓".green(),
                page,
                path.display().to_string().cyan()
            );
        }
        None => output::print_text(&html)?,
    }

    Ok(())
}

async fn render<F: Fetch>(engine: Engine<F, &FileStore>, page: &str) -> Result<String> {
    Ok(engine.render_page(page).await?)
}
