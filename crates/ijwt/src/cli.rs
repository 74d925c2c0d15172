//! CLI command structure using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ijwt")]
#[command(version, about = "Assemble HTML pages from include placeholders", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to ijwt.toml (defaults to ./ijwt.toml when present)
    #[arg(short, long, global = true, env = "IJWT_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a page with every include resolved
    Render {
        /// Page to render (defaults to the configured index)
        #[arg(short, long)]
        page: Option<String>,

        /// Serve the site from this directory instead of over HTTP
        #[arg(long)]
        root: Option<PathBuf>,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print the URL of the first directory holding a file
    Resolve {
        /// File name, e.g. "global.css"
        file: String,

        /// Serve the site from this directory instead of over HTTP
        #[arg(long)]
        root: Option<PathBuf>,
    },

    /// Re-root a relative resource path at the site base
    Qualify {
        /// Path such as "../static/css/global.css"
        path: String,
    },

    /// Persistent cache management
    #[command(subcommand)]
    Cache(CacheCommands),
}

#[derive(Subcommand)]
pub enum CacheCommands {
    /// Remove every entry under the configured prefix
    Clear,

    /// Print a cached entry
    Get {
        /// Entry name without the prefix, e.g. "header.html"
        name: String,
    },

    /// Remove a cached entry
    Delete {
        /// Entry name without the prefix
        name: String,
    },
}
