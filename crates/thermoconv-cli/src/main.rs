//! Thermoconv CLI
//!
//! Command-line interface for converting temperatures.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use thermoconv_cli::cli::Cli;
use thermoconv_cli::logging;
use thermoconv_core::ThermoConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ThermoConfig::load(cli.config.as_deref());
    let level = config
        .as_ref()
        .map(|c| c.logging.level.clone())
        .unwrap_or_else(|_| "info".to_string());
    logging::init(&level, cli.verbose);

    thermoconv_cli::run(cli, config).await.map_err(|e| {
        tracing::debug!(error = ?e, "command failed");
        anyhow::anyhow!(e.user_message())
    })
}
