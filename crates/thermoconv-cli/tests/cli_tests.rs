//! Integration tests for the CLI command handlers.

#![allow(clippy::unwrap_used)]

use clap::Parser;
use thermoconv_cli::cli::{Cli, Command};
use thermoconv_cli::commands::cmd_convert;
use thermoconv_cli::config_handlers::cmd_config_init;
use thermoconv_cli::interactive::run_session;
use thermoconv_core::{ConverterForm, ThermoConfig};

fn write_config(dir: &tempfile::TempDir, content: &str) -> String {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_convert_uses_configured_default_units() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "[defaults]\nfrom = \"F\"\nto = \"K\"\n");
    let config = ThermoConfig::load(Some(&path)).unwrap();

    let mut out = Vec::new();
    cmd_convert(&config, "32", None, None, false, &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();
    assert_eq!(
        output,
        "273.15 K\n32 °F → 273.15 K (K = (F − 32) × 5/9 + 273.15)\n"
    );
}

#[test]
fn test_convert_flags_override_config() {
    let config = ThermoConfig::default();
    let mut out = Vec::new();
    cmd_convert(&config, "212", Some("F"), Some("C"), false, &mut out).unwrap();
    assert!(String::from_utf8(out).unwrap().starts_with("100 °C\n"));
}

#[test]
fn test_init_then_parse_config_flag() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("thermoconv.toml");
    let path_str = path.to_str().unwrap();
    cmd_config_init(Some(path_str), false, &mut Vec::new()).unwrap();

    let cli = Cli::try_parse_from(["thermoconv", "--config", path_str, "interactive"]).unwrap();
    assert!(matches!(cli.command, Command::Interactive));
    let config = ThermoConfig::load(cli.config.as_deref()).unwrap();
    assert_eq!(config, ThermoConfig::default());
}

#[test]
fn test_interactive_session_round_trip() {
    let mut form = ConverterForm::new();
    let mut out = Vec::new();
    run_session(&mut form, "from K\n0\nswap\n\nquit\n".as_bytes(), &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    assert!(output.contains("K → °F\n"));
    assert!(output.contains("0 K → -459.67 °F (F = (K − 273.15) × 9/5 + 32)\n"));
    assert!(output.contains("°F → K\n"));
    assert!(output.contains("> 0 K\n"));
}
