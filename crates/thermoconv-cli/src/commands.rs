//! Handlers for the `convert` and `serve` commands.

use std::io::Write;

use thermoconv_api::Server;
use thermoconv_core::{ConversionRequest, ThermoConfig, handle_request};

use crate::Result;

/// Convert one value and write the result.
///
/// Units default to the configured ones. Plain output is the formatted
/// result on one line and the equation sentence on the next.
pub fn cmd_convert<W: Write>(
    config: &ThermoConfig,
    value: &str,
    from: Option<&str>,
    to: Option<&str>,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let request = ConversionRequest::new(
        value,
        from.unwrap_or(config.defaults.from.token()),
        to.unwrap_or(config.defaults.to.token()),
    );
    let outcome = handle_request(&request)?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&outcome)?)?;
    } else {
        writeln!(out, "{}", outcome.display)?;
        writeln!(out, "{}", outcome.equation)?;
    }
    Ok(())
}

/// Serve the HTTP API, applying any command-line overrides to the config.
pub async fn cmd_serve(
    mut config: ThermoConfig,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    Server::new(config).serve().await?;
    Ok(())
}
