//! chef - Chef Buddy account CLI
//!
//! Sign in, generate recipes, inspect this month's usage and upgrade to the unlimited plan
//! from a terminal.
//!
//! # Examples
//!
//! ```bash
//! # Sign in (the session is saved to ~/.chef-buddy/session.json)
//! chef login --email chef@example.com --password secret
//!
//! # Generate a recipe (free plan: 50 per month)
//! chef generate --ingredient pasta --ingredient tomatoes --category veloce
//!
//! # Start an upgrade, then confirm it once the browser is redirected back
//! chef checkout --origin-url http://localhost:5173
//! chef confirm --return-url "http://localhost:5173/payment-success?session_id=cs_123"
//! ```

mod cli;
mod commands;
mod error;
mod handlers;
mod logger;


use crate::{cli::Cli, error::Result as CliResult, handlers::Handlers};

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use cb_client::HttpApi;
use cb_config::Config;
use clap::Parser;
use log::info;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let _ = dotenvy::dotenv();

    match run(cli.command, cli.server, cli.pretty).await {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            match e.backend_message() {
                Some(message) => eprintln!("{}", message),
                None => eprintln!("Error: {}", e),
            }
            if e.is_network() {
                eprintln!("Is the backend running? Point to it with --server.");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(
    command: commands::Commands,
    server: Option<String>,
    pretty: bool,
) -> CliResult<String> {
    let config_dir = Config::config_dir()?;
    let mut config = Config::load_from(&config_dir)?;
    if let Some(server) = server {
        config.api.base_url = server;
    }
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    )?;
    info!("Starting chef v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let api = Arc::new(HttpApi::from_config(&config.api)?);
    info!("Backend: {}", api.base_url());
    let handlers = Handlers::new(api, config.poll.clone(), config_dir);
    let value = handlers.run(command).await?;

    render(&value, pretty)
}

fn render(value: &Value, pretty: bool) -> CliResult<String> {
    let output = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(output)
}
