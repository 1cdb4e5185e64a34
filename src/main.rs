use anyhow::Result;
use gan_relay::{config, server};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

/// `RUST_LOG` takes full filter directives; the config only names a level.
fn log_filter(rust_log: Option<&str>, configured_level: &str) -> Result<EnvFilter> {
    match rust_log {
        Some(directives) => EnvFilter::try_new(directives)
            .map_err(|e| anyhow::anyhow!("Invalid RUST_LOG '{}': {}", directives, e)),
        None => {
            validate_log_level(configured_level)?;
            Ok(EnvFilter::try_new(configured_level)?)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Environment variable overrides config
    let rust_log = std::env::var("RUST_LOG").ok();
    let log_level = rust_log
        .clone()
        .unwrap_or_else(|| config.server.logs.level.clone());

    let filter = match log_filter(rust_log.as_deref(), &config.server.logs.level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .init();

    info!("Starting generation relay with log level: {}", log_level);

    if let Err(e) = server::run(config).await {
        tracing::error!("Server terminated: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
