//! # thermoconv-cli
//!
//! Command-line front end for Thermoconv:
//! - One-shot conversion (`convert`)
//! - Interactive converter session (`interactive`)
//! - HTTP API server (`serve`)
//! - Configuration management (`config`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config_handlers;
pub mod error;
pub mod interactive;
pub mod logging;

pub use error::{Error, Result};

use std::io;

use cli::{Cli, Command};
use thermoconv_core::{ConverterForm, ThermoConfig};

/// Dispatch a parsed command line.
///
/// `config` is the result of loading configuration up front; commands that
/// need it surface a load failure, while `config path` and `config init`
/// work regardless.
pub async fn run(cli: Cli, config: thermoconv_core::Result<ThermoConfig>) -> Result<()> {
    let mut stdout = io::stdout();
    match cli.command {
        Command::Convert {
            value,
            from,
            to,
            json,
        } => commands::cmd_convert(
            &config?,
            &value,
            from.as_deref(),
            to.as_deref(),
            json,
            &mut stdout,
        ),
        Command::Interactive => {
            let config = config?;
            let mut form = ConverterForm::with_units(config.defaults.from, config.defaults.to);
            interactive::run_session(&mut form, io::stdin().lock(), &mut stdout)
        }
        Command::Serve { host, port } => commands::cmd_serve(config?, host, port).await,
        Command::Config { action } => {
            config_handlers::handle_config_command(cli.config.as_deref(), action, &mut stdout)
        }
    }
}
