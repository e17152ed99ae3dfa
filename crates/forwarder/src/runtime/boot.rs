//! Boot — logging init and config load.

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::conf::ForwarderConfig;

/// Initialise the tracing / logging subsystem.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "forwarder=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Load and validate configuration, then probe the watched directory.
///
/// Everything here is startup-fatal: an invalid interval, a broken config
/// file, or an unreadable message directory logs one fatal line and stops
/// the process before any cycle runs. Transient failures after startup are
/// handled per-cycle instead.
pub async fn boot() -> Result<ForwarderConfig, Box<dyn std::error::Error>> {
    info!("Starting Logdrop Forwarder v0.0.1");

    let config = ForwarderConfig::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    info!(
        "Watching {} every {} (step tracing: {})",
        config.message_path,
        humantime::format_duration(config.interval),
        if config.debug { "on" } else { "off" }
    );

    // Startup probe: the directory must be listable before the first tick.
    tokio::fs::read_dir(&config.message_path).await.map_err(|e| {
        error!("Message directory {} is not readable: {}", config.message_path, e);
        e
    })?;

    Ok(config)
}
