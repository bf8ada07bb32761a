mod api;
mod config;
mod logging;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use recap_core::RetryPolicy;
use recap_git::DiffCollector;
use recap_llm::OpenAiClient;

use crate::api::AppState;
use crate::config::Config;
use crate::logging::LogFormat;

#[derive(Parser, Debug)]
#[command(
    name = "recap",
    about = "Context re-entry summary backend",
    version
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = config::CONFIG_FILE_NAME)]
    config: PathBuf,

    /// Override the bind host from the config file
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port from the config file
    #[arg(short, long)]
    port: Option<u16>,

    /// Log output format
    #[arg(long, value_enum, default_value = "pretty")]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_tracing("info", cli.log_format);

    let config = Config::load(&cli.config)?;

    let host = cli.host.unwrap_or_else(|| config.server.host.clone());
    let port = cli.port.unwrap_or(config.server.port);

    let api_key = config.llm.api_key()?;
    let client = OpenAiClient::new(
        api_key,
        config.llm.base_url.clone(),
        config.llm.model.clone(),
    )
    .context("Failed to construct completion client")?
    .with_max_tokens(config.llm.max_tokens)
    .with_temperature(config.llm.temperature);

    let retry = RetryPolicy::new(
        config.summary.max_attempts,
        Duration::from_millis(config.summary.backoff_ms),
    );

    let state = AppState {
        client: Arc::new(client),
        collector: Arc::new(DiffCollector::new()),
        retry,
    };

    let router = api::create_router(state, &config.server.allowed_origins);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    eprintln!();
    eprintln!(
        "  {} {}",
        "->".bright_green(),
        format!("recap listening on http://{addr}").bold()
    );
    eprintln!("  {} model: {}", "->".dimmed(), config.llm.model);
    eprintln!("  {} Press {} to stop", "->".dimmed(), "Ctrl+C".bold());
    eprintln!();

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("API server error")
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for Ctrl+C");
    eprintln!("\nShutting down...");
}
