//! Handler functions for config CLI commands.
//!
//! Implements the config subcommands (`path`, `show`, `init`) on top of
//! [`ThermoConfig`].

use std::io::Write;
use std::path::PathBuf;

use thermoconv_core::config::PROJECT_NAME;
use thermoconv_core::{Error, ThermoConfig};

use crate::Result;
use crate::cli::ConfigAction;

/// Handle a config subcommand.
pub fn handle_config_command<W: Write>(
    config_path: Option<&str>,
    action: ConfigAction,
    out: &mut W,
) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path, out),
        ConfigAction::Show => cmd_config_show(config_path, out),
        ConfigAction::Init { file, force } => cmd_config_init(file.as_deref(), force, out),
    }
}

/// Show the resolved config file path.
pub fn cmd_config_path<W: Write>(config_path: Option<&str>, out: &mut W) -> Result<()> {
    match ThermoConfig::resolve_config_path(config_path) {
        Some(path) => {
            writeln!(out, "{}", path.display())?;
            if !path.exists() {
                eprintln!("(file does not exist — run `{PROJECT_NAME} config init` to create it)");
            }
            Ok(())
        }
        None => Err(Error::config("Could not determine config directory for this platform").into()),
    }
}

/// Print the effective configuration as TOML.
pub fn cmd_config_show<W: Write>(config_path: Option<&str>, out: &mut W) -> Result<()> {
    let config = ThermoConfig::load(config_path)?;
    write!(out, "{}", config.to_toml_string()?)?;
    Ok(())
}

/// Create a default configuration file.
pub fn cmd_config_init<W: Write>(file: Option<&str>, force: bool, out: &mut W) -> Result<()> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => ThermoConfig::default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        ))
        .into());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }

    let toml_str = ThermoConfig::default().to_toml_string()?;
    std::fs::write(&path, &toml_str).map_err(|e| Error::io_with_path(e, &path))?;

    writeln!(out, "Config file created at {}", path.display())?;
    Ok(())
}
