//! Centralita Core Library
//!
//! This crate provides the foundational types, traits, and error handling
//! for the Centralita call-billing simulator. It includes:
//!
//! - Domain models (Call, TimeBand, Tariff)
//! - Cost policy and call store traits
//! - Unified error handling
//! - Application configuration

pub mod config;
pub mod error;
pub mod models;
pub mod traits;

pub use config::AppConfig;
pub use error::AppError;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
