//! Startup: configuration, logging and opening the analyzer connection.
//!
//! # Components
//!
//! - [`config`] - Layered dashboard configuration
//! - [`logging`] - File-backed tracing subscriber
//!
//! # Usage
//!
//! ```ignore
//! use solidlens::startup::{open_link, DashboardConfig};
//!
//! let config = DashboardConfig::from_env()?.apply_cli(&options);
//! config.validate()?;
//! let link = open_link(&config).await;
//! ```

pub mod config;
pub mod logging;

pub use config::{ConfigError, DashboardConfig, DEFAULT_DEBOUNCE, DEFAULT_WS_URL};
pub use logging::{default_log_path, init_default_logging, init_logging, LoggingError};

use std::sync::Arc;

use tracing::{info, warn};

use crate::adapters::TungsteniteWsConnection;
use crate::app::AnalysisLink;

/// Open the single analyzer socket.
///
/// A failed connect is not fatal: the dashboard runs with an offline link
/// and shows the connection as closed. There is no retry.
pub async fn open_link(config: &DashboardConfig) -> AnalysisLink {
    info!("Connecting to analyzer at {}", config.ws_url);
    match TungsteniteWsConnection::connect(config.ws_client_config()).await {
        Ok(conn) => {
            info!("Analyzer connection open");
            AnalysisLink::new(Arc::new(conn), config.debounce)
        }
        Err(e) => {
            warn!("Analyzer connection failed: {}", e);
            AnalysisLink::offline(config.debounce)
        }
    }
}
