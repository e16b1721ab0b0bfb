//! Spell Bot - Main entry point.

use anyhow::Context;
use signal_client::{MessageReceiver, SignalClient};
use spell_api_client::SpellApiClient;
use spell_bot::config::{Config, LogFormat};
use spell_bot::error::AppResult;
use spell_bot::Dispatcher;
use std::sync::Arc;
use tokio_stream::StreamExt;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.bot.log_level, config.bot.log_format);

    info!("Starting Spell Bot...");

    // Initialize clients
    let spell_api = Arc::new(
        SpellApiClient::new(
            &config.spell_api.base_url,
            config.spell_api.lookup_timeout,
            config.spell_api.write_timeout,
        )
        .context("Failed to create Spell API client")?,
    );

    let signal = SignalClient::new(&config.signal.service_url, &config.signal.phone_number)
        .context("Failed to create Signal client")?;

    // Health checks
    if spell_api.health_check().await {
        info!("Spell API reachable at {}", config.spell_api.base_url);
    } else {
        warn!("Spell API not reachable - lookups will fail until it is");
    }

    if !signal.health_check().await {
        error!("Signal API not reachable at {}", config.signal.service_url);
        return Err(anyhow::anyhow!("Signal API not reachable").into());
    }
    info!("Signal API healthy");

    let replies = Arc::new(signal.clone());
    let dispatcher = Arc::new(Dispatcher::new(
        config.bot.trigger_prefix.clone(),
        spell_api,
        replies.clone(),
    ));

    info!("Listening for messages with prefix {:?}...", dispatcher.prefix());

    // Start message receiver
    let receiver = MessageReceiver::new(signal, config.signal.poll_interval);
    let mut stream = Box::pin(receiver.stream());

    // Main message loop; every message is handled on its own task.
    loop {
        tokio::select! {
            Some(message) = stream.next() => {
                let dispatcher = dispatcher.clone();
                let replies = replies.clone();
                tokio::spawn(async move {
                    dispatcher.handle(&message, &*replies).await;
                });
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    info!("Shutting down...");
    Ok(())
}

fn init_logging(level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
    }
}
