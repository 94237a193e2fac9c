//! rul-predictor: RUL regression server
//!
//! Trains the model once, then serves the JSON API and the dashboard.

use std::io::IsTerminal;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rul_predictor::adapters::SvrParams;
use rul_predictor::application::InferenceService;
use rul_predictor::config::{LogMode, ServerConfig};
use rul_predictor::web;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::from_env().context("Invalid configuration")?;

    // Initialize logging.
    // - interactive TTY in auto mode: log to a file so the terminal stays clean
    // - otherwise: log to stdout
    let use_file = match config.log_mode {
        LogMode::File => true,
        LogMode::Stdout => false,
        LogMode::Auto => std::io::stdout().is_terminal(),
    };

    let (writer, _guard) = if use_file {
        if let Some(parent) = config.log_file.parent() {
            // Best-effort: a missing directory surfaces as an open error below.
            let _ = std::fs::create_dir_all(parent);
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.log_file)
            .with_context(|| format!("Failed to open log file {:?}", config.log_file))?;
        tracing_appender::non_blocking(file)
    } else {
        tracing_appender::non_blocking(std::io::stdout())
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(writer))
        .init();

    tracing::info!("Starting rul-predictor...");

    let dataset = config.dataset.clone();
    let service = tokio::task::spawn_blocking(move || {
        InferenceService::train(dataset.source().as_ref(), &SvrParams::default())
    })
    .await
    .context("Training task panicked")?
    .context("Failed to train model")?;

    web::serve(Arc::new(service), config.bind_addr).await?;

    tracing::info!("rul-predictor shutdown complete.");
    Ok(())
}
