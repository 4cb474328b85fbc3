use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Package search bot - echo, greetings and registry search cards
#[derive(Parser, Debug)]
#[command(name = "pkgsearch-bot")]
#[command(author = "PkgSearch Team")]
#[command(version)]
#[command(about = "Chat bot with a package registry search extension", long_about = None)]
pub struct Cli {
    /// Configuration file (default: ~/.config/pkgsearch-bot/config.yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

// CLI submodule declarations
pub mod search;
pub mod select;
pub mod serve;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the bot HTTP endpoint
    Serve(ServeArgs),

    /// Search the package registry and print the results
    Search(SearchArgs),

    /// Render the selection card for a preview tap payload
    Select(SelectArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,
    /// Port to listen on
    #[arg(long)]
    pub port: Option<u16>,
    /// Number of worker threads
    #[arg(long)]
    pub workers: Option<usize>,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Package id search text
    pub query: String,
    /// Output format: cli, json, md, csv, cards
    #[arg(long, default_value = "cli")]
    pub format: String,
    /// Number of results to show
    #[arg(short, long, default_value = "20")]
    pub limit: usize,
}

#[derive(Args, Debug)]
pub struct SelectArgs {
    /// Tap payload JSON, e.g. '{"data":["Foo","1.0","desc","https://p","https://i"]}'
    pub payload: String,
}
