use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "chef")]
#[command(about = "Chef Buddy account and upgrade CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Backend URL (overrides CB_API_BASE_URL and config.toml)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
