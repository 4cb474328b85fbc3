use crate::cli::SearchArgs;
use crate::config::Config;
use crate::formatter::Format;
use crate::search::PackageSearchClient;
use anyhow::{Context, Result};

/// Handle search command - one registry query, printed in the chosen format
pub fn handle(cmd: &SearchArgs, config: &Config) -> Result<()> {
    let client = PackageSearchClient::new(&config.registry)?;

    // Create a Tokio runtime for async operations
    let rt = tokio::runtime::Runtime::new()?;

    let rows = rt
        .block_on(client.search(&cmd.query))
        .with_context(|| format!("Search for '{}' failed", cmd.query))?;

    let formatter = Format::from_string(&cmd.format);
    formatter.print_rows(&cmd.query, &rows, cmd.limit)?;

    Ok(())
}
