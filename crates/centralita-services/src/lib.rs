//! Business logic services for Centralita
//!
//! # Services
//!
//! - `CallRegistry` - Ordered, in-memory store of registered calls
//! - `ReportGenerator` - Call count and billing totals, rendered as text or JSON

pub mod dto;
pub mod registry;
pub mod report;

pub use dto::{CallSummary, ReportDocument};
pub use registry::CallRegistry;
pub use report::{Report, ReportGenerator};

pub use centralita_core::config::ReportFormat;

/// Report layout constants
pub mod constants {
    /// Heading printed above the summary lines
    pub const REPORT_HEADING: &str = "--- REPORT ---";

    /// Monetary unit shown next to every amount
    pub const CURRENCY_UNIT: &str = "cents";
}
