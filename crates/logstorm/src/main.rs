use std::str::FromStr;

use tokio_util::sync::CancellationToken;
use tracing::info;

use logstorm_client::ApiClient;
use logstorm_core::{Config, Dispatcher};
use logstorm_observe::{LoggerConfig, LoggerFormat, logger_init};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    let logger = LoggerConfig {
        level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        format: match std::env::var("LOG_FORMAT") {
            Ok(raw) => LoggerFormat::from_str(&raw)?,
            Err(_) => LoggerFormat::Text,
        },
        ..Default::default()
    };
    logger_init(&logger)?;

    info!(
        url = %config.base_url(),
        workers = config.workers,
        fixed_wait_ms = config.fixed_wait.as_millis() as u64,
        payload = ?config.payload,
        "starting load generator"
    );

    let client = ApiClient::new(config.base_url());
    let dispatcher = Dispatcher::new(client, config);

    let cancel = CancellationToken::new();
    let pool = tokio::spawn(dispatcher.run(cancel.clone()));

    tokio::signal::ctrl_c().await?;
    info!("shutting down...");
    cancel.cancel();
    pool.await?;

    Ok(())
}
