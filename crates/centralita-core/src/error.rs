//! Unified error handling for Centralita
//!
//! Call construction is the only operation on the billing path that can
//! fail; everything else (cost, listing, reporting) is total over valid data.

use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    // ==================== Domain Errors ====================
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    // ==================== Internal Errors ====================
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl AppError {
    /// Returns a stable machine-readable code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidParameter(_) => "invalid_parameter",
            AppError::Config(_) => "config_error",
            AppError::Serialization(_) => "serialization_error",
        }
    }
}

// ==================== From implementations ====================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::InvalidParameter(err.to_string())
    }
}
