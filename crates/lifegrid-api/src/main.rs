//! Lifegrid API server binary.
//!
//! Loads configuration, initializes tracing, and serves the board API
//! until `Ctrl-C`.
//!
//! The configuration file path is taken from `LIFEGRID_CONFIG`, falling
//! back to `lifegrid-config.yaml` in the working directory. A missing
//! file means built-in defaults plus environment overrides.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use lifegrid_api::{AppState, start_server};
use lifegrid_core::{LifegridConfig, LogFormat, LoggingConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

const CONFIG_ENV: &str = "LIFEGRID_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "lifegrid-config.yaml";

/// Application entry point.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, source) = load_config()?;
    init_tracing(&config.logging);

    info!(
        config = %source,
        address = %config.server.address(),
        default_max_iterations = config.simulation.default_max_iterations,
        "lifegrid-api starting"
    );

    let state = Arc::new(AppState::new(config.simulation));
    start_server(&config.server, state)
        .await
        .context("lifegrid-api server failed")?;

    Ok(())
}

fn load_config() -> anyhow::Result<(LifegridConfig, String)> {
    let path = std::env::var(CONFIG_ENV)
        .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);

    if path.exists() {
        let config = LifegridConfig::from_file(&path)
            .with_context(|| format!("failed to load {}", path.display()))?;
        return Ok((config, path.display().to_string()));
    }

    let mut config = LifegridConfig::default();
    config.server.apply_env_overrides();
    Ok((config, String::from("defaults")))
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    match logging.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
    }
}
