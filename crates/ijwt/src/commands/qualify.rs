use crate::output;
use anyhow::Result;
use ijwt_core::config::Config;
use ijwt_core::config::consts::CONFIG_FILE;
use ijwt_core::qualifier::qualify;
use std::path::Path;

/// Print `path` re-rooted at the site base. Needs no store or network.
pub fn run(config: Option<&Path>, path: String) -> Result<()> {
    let config = match config {
        Some(file) => Config::from_file(file)?,
        None => Config::from_file_or_default(CONFIG_FILE)?,
    };
    let url = qualify(&config.site_base()?, &path)?;
    output::print_text(&url)?;
    Ok(())
}
