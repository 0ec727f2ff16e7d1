//! Server binary for the foraging colony simulation.
//!
//! Loads configuration, initializes structured logging, builds the world,
//! and serves the Observer API until Ctrl-C is received.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `COLONY_CONFIG` or `colony-config.yaml`
//! 2. Apply environment overrides (`PORT`)
//! 3. Initialize structured logging (tracing)
//! 4. Build the world from the configured parameters and seed
//! 5. Serve the Observer API until shutdown

mod error;

use std::path::PathBuf;
use std::sync::Arc;

use colony_core::config::SimulationConfig;
use colony_core::{SystemClock, WorldState};
use colony_observer::{AppState, ServerConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "colony-config.yaml";

/// Environment variable naming an alternative configuration file.
const CONFIG_PATH_ENV: &str = "COLONY_CONFIG";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration is invalid, the world cannot be
/// built, or the server fails to bind.
#[tokio::main]
async fn main() -> Result<(), EngineError> {
    // 1-2. Load configuration and environment overrides.
    let config_path = config_path();
    let loaded = config_path.exists();
    let mut config = if loaded {
        SimulationConfig::from_file(&config_path)?
    } else {
        SimulationConfig::default()
    };
    config.apply_env_overrides();

    // 3. Initialize structured logging.
    init_logging(&config.logging.level)?;

    info!("colony-engine starting");
    if loaded {
        info!(path = %config_path.display(), "Configuration loaded");
    } else {
        info!(path = %config_path.display(), "Config file not found, using defaults");
    }
    info!(
        seed = config.world.seed,
        scouts = config.parameters.scout_count,
        foragers = config.parameters.forager_count,
        deposits = config.parameters.deposit_count,
        "Simulation configured"
    );

    // 4. Build the world.
    let world = WorldState::from_config(&config, Arc::new(SystemClock))?;
    let state = Arc::new(AppState::new(world));

    // 5. Serve until Ctrl-C.
    let server_config = ServerConfig::from(&config.observer);
    colony_observer::start_server(&server_config, state, shutdown_signal()).await?;

    info!("colony-engine stopped");
    Ok(())
}

/// The configuration file to read: `COLONY_CONFIG` if set, otherwise
/// `colony-config.yaml` in the working directory.
fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_PATH_ENV)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the configured level is used.
fn init_logging(level: &str) -> Result<(), EngineError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| EngineError::Logging {
            message: format!("invalid log filter: {e}"),
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| EngineError::Logging {
            message: format!("failed to install subscriber: {e}"),
        })
}

/// Resolve when Ctrl-C is received.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "Failed to listen for Ctrl-C; serving until killed");
            std::future::pending::<()>().await;
        }
    }
}
