//! Cache command - inspect and reset the persistent store

use crate::context::Context;
use crate::output;
use anyhow::{Result, anyhow};
use colored::Colorize;
use std::path::Path;

pub fn clear(config: Option<&Path>) -> Result<()> {
    let ctx = Context::new(config)?;
    let removed = ctx.cache().clear()?;
    eprintln!(
        "{} Cleared {} entr{} under '{}_'",
        "✓".green(),
        removed,
        if removed == 1 { "y" } else { "ies" },
        ctx.config.engine.prefix
    );
    Ok(())
}

pub fn get(config: Option<&Path>, name: String) -> Result<()> {
    let ctx = Context::new(config)?;
    match ctx.cache().get(&name)? {
        Some(data) => Ok(output::print_text(&data)?),
        None => Err(anyhow!("No cache entry named '{}'", name)),
    }
}

pub fn delete(config: Option<&Path>, name: String) -> Result<()> {
    let ctx = Context::new(config)?;
    ctx.cache().delete(&name)?;
    eprintln!("{} Deleted '{}'", "✓".green(), name);
    Ok(())
}
