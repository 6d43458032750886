//! Selerna application binary - composition root.
//!
//! 1. Parse CLI arguments and load configuration from TOML
//! 2. Apply environment and CLI overrides
//! 3. Build the reply pipeline (model and speech clients when configured)
//! 4. Start the axum HTTP server

mod cli;

use clap::Parser;

use selerna_api::routes;
use selerna_api::state::AppState;
use selerna_chat::ReplyPipeline;
use selerna_core::config::SelernaConfig;
use selerna_core::error::SelernaError;

use crate::cli::CliArgs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config. Loaded before tracing so the configured log level applies;
    // a load failure is reported once the subscriber is installed.
    let config_file = args.resolve_config_path();
    let (mut config, load_error) = match SelernaConfig::load(&config_file) {
        Ok(config) => (config, None),
        Err(e) => (SelernaConfig::default(), Some(e)),
    };
    config.apply_env_overrides();
    config.general.port = args.resolve_port(config.general.port);
    if let Some(ref bind) = args.bind {
        config.general.bind_address = bind.clone();
    }
    if let Some(ref level) = args.log_level {
        config.general.log_level = level.clone();
    }

    // Tracing. RUST_LOG wins over the configured level.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.general.log_level)),
        )
        .init();

    tracing::info!("Starting Selerna v{}", env!("CARGO_PKG_VERSION"));
    match load_error {
        None => tracing::info!(path = %config_file.display(), "Configuration loaded"),
        Some(e) => tracing::warn!(
            path = %config_file.display(),
            error = %e,
            "Failed to load config; using defaults"
        ),
    }

    // Pipeline.
    let pipeline = ReplyPipeline::from_config(&config).map_err(SelernaError::from)?;
    if !pipeline.overlay_enabled() {
        tracing::info!("No model API key configured; serving canned replies only");
    }
    if !pipeline.speech_enabled() {
        tracing::info!("Speech synthesis not configured; replies will carry no audio");
    }

    // API server.
    let state = AppState::new(config.clone(), pipeline);
    if let Err(e) = routes::start_server(&config, state).await {
        tracing::error!(
            addr = %format!("{}:{}", config.general.bind_address, config.general.port),
            error = %e,
            "API server stopped"
        );
        return Err(e.into());
    }

    Ok(())
}
