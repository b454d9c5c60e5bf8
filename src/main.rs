use anyhow::{Context, Result};

use weatherdash::{AppConfig, logging, web};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    logging::init(&config.logging)?;

    tracing::info!(
        version = weatherdash::VERSION,
        host = %config.server.host,
        port = config.server.port,
        "Starting WeatherDash"
    );

    web::run(config).await
}
