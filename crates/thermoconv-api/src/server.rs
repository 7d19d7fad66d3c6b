//! API server implementation

use axum::Router;
use thermoconv_core::ThermoConfig;
use tokio::net::TcpListener;
use tracing::info;

use crate::Result;
use crate::routes::{AppState, router};

/// Thermoconv API server
pub struct Server {
    config: ThermoConfig,
}

impl Server {
    /// Create a new server instance
    pub fn new(config: ThermoConfig) -> Self {
        Self { config }
    }

    /// The address the server binds to.
    pub fn addr(&self) -> String {
        self.config.server_addr()
    }

    /// Build the router without binding.
    pub fn router(&self) -> Router {
        router(AppState::new(
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
        ))
    }

    /// Bind and serve until the process is stopped.
    pub async fn serve(self) -> Result<()> {
        let listener = TcpListener::bind(self.addr()).await?;
        info!(addr = %self.addr(), "thermoconv API listening");
        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}

impl Default for Server {
    fn default() -> Self {
        Self::new(ThermoConfig::default())
    }
}
