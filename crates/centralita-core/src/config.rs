//! Application configuration
//!
//! This module provides centralized configuration management using the `config` crate.
//! Configuration can be loaded from environment variables and config files; every
//! value has a default, so the simulator runs without any of them.

use config::{Config, ConfigError, Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::env;
use validator::Validate;

use crate::error::AppError;
use crate::models::Tariff;
use crate::AppResult;

/// Main application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub tariff: TariffConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Tariff rates, in cents per second
#[derive(Debug, Deserialize, Clone, Validate)]
pub struct TariffConfig {
    /// Local call rate
    #[serde(default = "default_local_rate")]
    #[validate(range(
        min = 0.0,
        max = 1_000_000.0,
        message = "local_rate must be between 0 and 1000000"
    ))]
    pub local_rate: f64,

    /// Provincial rate for time band 1
    #[serde(default = "default_band1_rate")]
    #[validate(range(
        min = 0.0,
        max = 1_000_000.0,
        message = "band1_rate must be between 0 and 1000000"
    ))]
    pub band1_rate: f64,

    /// Provincial rate for time band 2
    #[serde(default = "default_band2_rate")]
    #[validate(range(
        min = 0.0,
        max = 1_000_000.0,
        message = "band2_rate must be between 0 and 1000000"
    ))]
    pub band2_rate: f64,

    /// Provincial rate for time band 3
    #[serde(default = "default_band3_rate")]
    #[validate(range(
        min = 0.0,
        max = 1_000_000.0,
        message = "band3_rate must be between 0 and 1000000"
    ))]
    pub band3_rate: f64,
}

fn default_local_rate() -> f64 {
    0.15
}

fn default_band1_rate() -> f64 {
    0.20
}

fn default_band2_rate() -> f64 {
    0.25
}

fn default_band3_rate() -> f64 {
    0.30
}

impl Default for TariffConfig {
    fn default() -> Self {
        Self {
            local_rate: default_local_rate(),
            band1_rate: default_band1_rate(),
            band2_rate: default_band2_rate(),
            band3_rate: default_band3_rate(),
        }
    }
}

impl TariffConfig {
    /// Validate the configured rates and build a `Tariff`
    ///
    /// Out-of-range rates are reported as `AppError::InvalidParameter`, the
    /// same error `Tariff::new` returns.
    pub fn to_tariff(&self) -> AppResult<Tariff> {
        self.validate()?;

        Tariff::new(
            rate_to_decimal("local_rate", self.local_rate)?,
            rate_to_decimal("band1_rate", self.band1_rate)?,
            rate_to_decimal("band2_rate", self.band2_rate)?,
            rate_to_decimal("band3_rate", self.band3_rate)?,
        )
    }
}

/// Convert through the shortest decimal representation so 0.15 stays 0.15
fn rate_to_decimal(name: &str, value: f64) -> AppResult<Decimal> {
    value
        .to_string()
        .parse::<Decimal>()
        .map(|d| d.normalize())
        .map_err(|e| AppError::Config(format!("{} = {} is not a valid rate: {}", name, value, e)))
}

/// Output format of the billing report
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable listing followed by the summary
    #[default]
    Text,
    /// Pretty-printed JSON document
    Json,
}

/// Report configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: ReportFormat,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Default level when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON log lines instead of the human-readable format
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment and optional config files
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            // Start with default values
            .set_default("tariff.local_rate", default_local_rate())?
            .set_default("tariff.band1_rate", default_band1_rate())?
            .set_default("tariff.band2_rate", default_band2_rate())?
            .set_default("tariff.band3_rate", default_band3_rate())?
            .set_default("report.format", "text")?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.json", false)?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables with CENTRALITA_ prefix
            .add_source(
                Environment::with_prefix("CENTRALITA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name(path))
            .add_source(Environment::with_prefix("CENTRALITA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
