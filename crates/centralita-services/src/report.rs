//! Billing report generation
//!
//! Reduces the registry to a call count and a total cost, and renders the
//! call listing followed by the summary.

use centralita_core::{
    config::{AppConfig, ReportFormat},
    models::{format_amount, Tariff},
    traits::{CallStore, CostPolicy},
    AppResult,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt::Write as _;
use tracing::{debug, info, instrument};

use crate::constants::{CURRENCY_UNIT, REPORT_HEADING};
use crate::dto::{CallSummary, ReportDocument};

/// Aggregate billing figures for the registry's current contents
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Number of registered calls
    pub call_count: usize,

    /// Sum of every call's cost, in cents
    pub total_cost: Decimal,

    /// When the report was produced
    pub generated_at: DateTime<Utc>,
}

impl Report {
    /// Summary block: heading, call count and total billing
    pub fn summary(&self) -> String {
        format!(
            "{}\nTotal calls: {}\nTotal billing: {} {}\n",
            REPORT_HEADING,
            self.call_count,
            format_amount(self.total_cost),
            CURRENCY_UNIT
        )
    }
}

/// Report generator
///
/// Prices calls with its tariff, which is the standard tariff unless
/// configured otherwise.
#[derive(Debug, Clone, Default)]
pub struct ReportGenerator {
    tariff: Tariff,
}

impl ReportGenerator {
    pub fn new(tariff: Tariff) -> Self {
        Self { tariff }
    }

    /// Build a generator from the configured tariff
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let tariff = config.tariff.to_tariff()?;
        debug!(?tariff, "Report generator configured");
        Ok(Self::new(tariff))
    }

    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    /// Count and total cost of the stored calls
    #[instrument(skip_all, fields(calls = store.len()))]
    pub fn generate<S: CallStore + ?Sized>(&self, store: &S) -> Report {
        let calls = store.list();
        let total_cost: Decimal = calls.iter().map(|call| self.tariff.cost_of(call)).sum();

        info!(
            "Report generated: {} calls, total {} {}",
            calls.len(),
            format_amount(total_cost),
            CURRENCY_UNIT
        );

        Report {
            call_count: calls.len(),
            total_cost,
            generated_at: Utc::now(),
        }
    }

    /// One description line per call, in registration order
    pub fn listing<S: CallStore + ?Sized>(&self, store: &S) -> String {
        store.list().iter().fold(String::new(), |mut out, call| {
            let _ = writeln!(out, "{}", call.describe_with(&self.tariff));
            out
        })
    }

    /// Listing, a blank line, then the summary block
    pub fn render_text<S: CallStore + ?Sized>(&self, store: &S) -> String {
        let report = self.generate(store);
        format!("{}\n{}", self.listing(store), report.summary())
    }

    /// Listing and totals as a pretty-printed JSON document
    pub fn render_json<S: CallStore + ?Sized>(&self, store: &S) -> AppResult<String> {
        let document = ReportDocument {
            calls: store
                .list()
                .iter()
                .map(|call| CallSummary::from_call(call, &self.tariff))
                .collect(),
            report: self.generate(store),
        };

        Ok(serde_json::to_string_pretty(&document)?)
    }

    pub fn render<S: CallStore + ?Sized>(&self, store: &S, format: ReportFormat) -> AppResult<String> {
        match format {
            ReportFormat::Text => Ok(self.render_text(store)),
            ReportFormat::Json => self.render_json(store),
        }
    }
}
