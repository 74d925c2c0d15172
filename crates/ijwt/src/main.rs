mod cli;
mod commands;
mod context;
mod logging;
mod output;

use clap::Parser;
use cli::{CacheCommands, Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Render { page, root, out } => commands::render::run(config, page, root, out),
        Commands::Resolve { file, root } => commands::resolve::run(config, file, root),
        Commands::Qualify { path } => commands::qualify::run(config, path),
        Commands::Cache(cache_cmd) => match cache_cmd {
            CacheCommands::Clear => commands::cache::clear(config),
            CacheCommands::Get { name } => commands::cache::get(config, name),
            CacheCommands::Delete { name } => commands::cache::delete(config, name),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
