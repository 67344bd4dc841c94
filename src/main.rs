//! Centralita call-billing simulator
//!
//! Registers a fixed set of sample calls, prints each one with its cost and
//! finishes with the billing report.

use anyhow::Context;
use centralita_core::{
    config::LoggingConfig,
    models::Call,
    AppConfig, AppResult,
};
use centralita_services::{CallRegistry, ReportGenerator};
use std::env;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging
///
/// Log output goes to stderr so the report on stdout stays clean.
fn init_tracing(logging: &LoggingConfig) {
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| logging.level.clone());

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "centralita={},centralita_core={},centralita_services={}",
            log_level, log_level, log_level
        ))
    });

    let registry = tracing_subscriber::registry().with(env_filter);

    if logging.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .init();
    }
}

/// Register the demonstration calls
fn register_sample_calls(registry: &mut CallRegistry) -> AppResult<()> {
    registry.register(Call::local("123456789", "987654321", 120)?);
    registry.register(Call::provincial("123456789", "654987321", 100, 1)?);
    registry.register(Call::provincial("987654321", "321654987", 80, 3)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("failed to load configuration")?;

    init_tracing(&config.logging);

    info!("Starting Centralita v{}", env!("CARGO_PKG_VERSION"));

    let generator = ReportGenerator::from_config(&config).context("invalid tariff configuration")?;
    info!(tariff = ?generator.tariff(), "Tariff loaded");

    let mut registry = CallRegistry::new();
    register_sample_calls(&mut registry).context("failed to register sample calls")?;
    info!("Registered {} calls", registry.len());

    let output = generator.render(&registry, config.report.format)?;
    println!("{}", output.trim_end());

    Ok(())
}
