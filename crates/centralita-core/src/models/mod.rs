//! Domain models for Centralita
//!
//! This module contains the call record and tariff types used throughout the application.

pub mod call;
pub mod tariff;

pub use call::{Call, CallKind};
pub use tariff::{format_amount, Tariff, TimeBand, MAX_RATE};
