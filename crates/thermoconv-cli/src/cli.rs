//! Command-line argument definitions.

use clap::{Parser, Subcommand};

/// Thermoconv - convert temperatures between Celsius, Fahrenheit and Kelvin
#[derive(Parser, Debug)]
#[command(name = "thermoconv", author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a single value
    Convert {
        /// Value to convert
        #[arg(allow_negative_numbers = true)]
        value: String,

        /// Source unit (C, F or K); defaults to the configured unit
        #[arg(short, long)]
        from: Option<String>,

        /// Target unit (C, F or K); defaults to the configured unit
        #[arg(short, long)]
        to: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run an interactive converter session on stdin/stdout
    Interactive,

    /// Serve the HTTP API
    Serve {
        /// Bind address (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Configuration management
    Config {
        /// Config action
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Print the effective configuration as TOML
    Show,
    /// Create a default configuration file
    Init {
        /// Write to this path instead of the default location
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
