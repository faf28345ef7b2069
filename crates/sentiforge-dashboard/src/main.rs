//! SentiForge Sentiment Dashboard
//!
//! Run with: cargo run -p sentiforge-dashboard [-- path/to/dashboard.toml]
//! Then open: http://localhost:5000

use std::sync::Arc;

use sentiforge_config::{ConfigError, DashboardConfig};
use sentiforge_dashboard::{build_app, build_state};
use tracing::{info, warn};

/// Read when no path is given on the command line.
const DEFAULT_CONFIG_PATH: &str = "dashboard.toml";

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let explicit_path = std::env::args().nth(1);
    let path = explicit_path
        .clone()
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let loaded = DashboardConfig::load(&path);
    let config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => DashboardConfig::default(),
    };

    sentiforge_console::init(&config.logging.filter);

    match loaded {
        Ok(_) => info!("Loaded configuration from {}", path),
        Err(ConfigError::Io(_)) if explicit_path.is_none() => {
            info!("No {} found, using default configuration", path)
        }
        Err(e) => warn!("Ignoring configuration {}: {}", path, e),
    }

    let state = Arc::new(build_state(&config));
    let app = build_app(&config, state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    let address = listener.local_addr()?;
    info!(event = "server_listening", address = %address);

    axum::serve(listener, app).await
}
