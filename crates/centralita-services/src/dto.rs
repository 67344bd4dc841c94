//! Report DTOs
//!
//! Serializable shapes used for the JSON rendering of a report.

use centralita_core::{
    models::{Call, Tariff},
    traits::CostPolicy,
};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::report::Report;

/// One registered call as shown in a report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallSummary {
    /// Caller number
    pub origin: String,

    /// Called number
    pub destination: String,

    /// Duration in seconds
    pub duration: i32,

    /// "local" or "provincial"
    pub call_type: String,

    /// Time band (provincial calls only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_band: Option<i32>,

    /// Cost in cents
    pub cost: Decimal,
}

impl CallSummary {
    /// Summarize a call, pricing it with the given policy
    pub fn from_call<P: CostPolicy + ?Sized>(call: &Call, policy: &P) -> Self {
        Self {
            origin: call.origin().to_string(),
            destination: call.destination().to_string(),
            duration: call.duration(),
            call_type: call.kind().as_str().to_string(),
            time_band: call.time_band().map(i32::from),
            cost: call.cost_with(policy),
        }
    }
}

impl From<&Call> for CallSummary {
    fn from(call: &Call) -> Self {
        Self::from_call(call, &Tariff::standard())
    }
}

/// Full JSON report: call listing plus totals
#[derive(Debug, Clone, Serialize)]
pub struct ReportDocument {
    pub calls: Vec<CallSummary>,
    pub report: Report,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_summary_from_local_call() {
        let call = Call::local("123456789", "987654321", 120).unwrap();
        let summary = CallSummary::from(&call);

        assert_eq!(summary.call_type, "local");
        assert_eq!(summary.time_band, None);
        assert_eq!(summary.cost, dec!(18.00));

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("time_band").is_none());
    }

    #[test]
    fn test_summary_from_provincial_call() {
        let call = Call::provincial("123456789", "654987321", 100, 1).unwrap();
        let summary = CallSummary::from(&call);

        assert_eq!(summary.call_type, "provincial");
        assert_eq!(summary.time_band, Some(1));
        assert_eq!(summary.cost, dec!(20.00));
    }
}
