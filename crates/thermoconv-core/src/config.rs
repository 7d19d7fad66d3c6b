//! Configuration for Thermoconv front ends.
//!
//! Configuration is a TOML file. Every field has a default, so a missing
//! file or a partial file is fine.
//!
//! ```toml
//! [defaults]
//! from = "C"
//! to = "F"
//!
//! [server]
//! host = "127.0.0.1"
//! port = 8080
//!
//! [logging]
//! level = "info"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::Unit;

/// Project name, used for the config directory.
pub const PROJECT_NAME: &str = "thermoconv";

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "THERMOCONV_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThermoConfig {
    /// Units preselected in a fresh form
    pub defaults: DefaultsConfig,
    /// HTTP listener
    pub server: ServerConfig,
    /// Log filter
    pub logging: LoggingConfig,
}

/// Units preselected in a fresh form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Source unit
    pub from: Unit,
    /// Target unit
    pub to: Unit,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            from: Unit::Celsius,
            to: Unit::Fahrenheit,
        }
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl ThermoConfig {
    /// The platform config file path, e.g. `~/.config/thermoconv/config.toml`.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join("config.toml"))
    }

    /// Resolves which config file to use.
    ///
    /// Checks in order:
    /// 1. The explicit path, if given
    /// 2. The `THERMOCONV_CONFIG` environment variable
    /// 3. The platform default path
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        resolve_with(explicit, std::env::var(CONFIG_ENV_VAR).ok())
    }

    /// Loads configuration.
    ///
    /// An explicitly named file must exist. A file found through the
    /// environment or the platform default is optional; if absent, defaults
    /// are used.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        match Self::resolve_config_path(explicit) {
            Some(path) if path.exists() => Self::from_file(&path),
            Some(path) if explicit.is_some() => Err(Error::config(format!(
                "Config file not found: {}",
                path.display()
            ))),
            _ => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Reads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        debug!(path = %path.display(), "loaded config file");
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e.to_string()))
    }

    /// Serializes configuration to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// The `host:port` the HTTP layer binds to.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn resolve_with(explicit: Option<&str>, from_env: Option<String>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(PathBuf::from(path));
    }
    if let Some(path) = from_env.filter(|p| !p.trim().is_empty()) {
        return Some(PathBuf::from(path));
    }
    ThermoConfig::default_config_path()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ThermoConfig::default();
        assert_eq!(config.defaults.from, Unit::Celsius);
        assert_eq!(config.defaults.to, Unit::Fahrenheit);
        assert_eq!(config.server_addr(), "127.0.0.1:8080");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = ThermoConfig::from_toml_str("[defaults]\nto = \"K\"\n").unwrap();
        assert_eq!(config.defaults.from, Unit::Celsius);
        assert_eq!(config.defaults.to, Unit::Kelvin);
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_unknown_unit_in_toml_is_config_error() {
        let err = ThermoConfig::from_toml_str("[defaults]\nfrom = \"R\"\n").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = ThermoConfig::default();
        config.server.port = 9090;
        config.defaults.from = Unit::Kelvin;
        let toml = config.to_toml_string().unwrap();
        assert!(toml.contains("from = \"K\""));
        assert_eq!(ThermoConfig::from_toml_str(&toml).unwrap(), config);
    }

    #[test]
    fn test_resolve_prefers_explicit() {
        let path = resolve_with(Some("/etc/t.toml"), Some("/env/t.toml".to_string()));
        assert_eq!(path, Some(PathBuf::from("/etc/t.toml")));
    }

    #[test]
    fn test_resolve_uses_env_then_default() {
        let path = resolve_with(None, Some("/env/t.toml".to_string()));
        assert_eq!(path, Some(PathBuf::from("/env/t.toml")));

        let path = resolve_with(None, Some("  ".to_string()));
        assert_eq!(path, ThermoConfig::default_config_path());
    }
}
