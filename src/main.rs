use anyhow::Result;
use course_recommender::{config, server};
use tracing::info;
use tracing_subscriber::EnvFilter;

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
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    let filter = match EnvFilter::try_new(&log_level) {
        Ok(filter) => filter,
        Err(_) => {
            eprintln!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                log_level
            );
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    info!(
        "Starting course recommender v{} with log level: {}",
        env!("CARGO_PKG_VERSION"),
        log_level
    );

    server::run(config).await?;

    Ok(())
}
