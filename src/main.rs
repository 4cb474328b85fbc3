use anyhow::{Context, Result};
use clap::Parser;
use pkgsearch_bot::cli::{self, Commands};
use pkgsearch_bot::config::Config;
use pkgsearch_bot::server::observability::init_logging;
use tracing::info;

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    init_logging();

    // Load configuration
    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load configuration from {:?}", path))?,
        None => Config::load().context("Failed to load configuration")?,
    };

    info!("Configuration loaded successfully");
    info!("Registry: {}", config.registry.base_url);

    // Dispatch commands
    match &cli.command {
        Commands::Serve(cmd) => cli::serve::handle(cmd, &config)?,
        Commands::Search(cmd) => cli::search::handle(cmd, &config)?,
        Commands::Select(cmd) => cli::select::handle(cmd)?,
    }

    Ok(())
}
