//! Call model
//!
//! A call record is built once through a validating constructor and is
//! read-only afterwards.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::error::AppError;
use crate::models::tariff::{format_amount, Tariff, TimeBand};
use crate::traits::CostPolicy;
use crate::AppResult;

/// Call type, with the parameters specific to each tariff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CallKind {
    /// Call inside the local area, billed at a flat per-second rate
    Local,
    /// Call to another province, billed according to its time band
    Provincial { time_band: TimeBand },
}

impl CallKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallKind::Local => "local",
            CallKind::Provincial { .. } => "provincial",
        }
    }
}

impl fmt::Display for CallKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallKind::Local => write!(f, "local"),
            CallKind::Provincial { time_band } => write!(f, "provincial (band {})", time_band),
        }
    }
}

/// Billable phone call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Call {
    origin: String,
    destination: String,
    /// Duration in seconds, never negative
    duration: i32,
    kind: CallKind,
}

impl Call {
    /// Create a local call
    pub fn local(
        origin: impl Into<String>,
        destination: impl Into<String>,
        duration: i32,
    ) -> AppResult<Self> {
        Self::new(origin, destination, duration, CallKind::Local)
    }

    /// Create a provincial call
    ///
    /// # Errors
    /// `AppError::InvalidParameter` when `time_band` is not 1, 2 or 3, or
    /// when `duration` is negative.
    pub fn provincial(
        origin: impl Into<String>,
        destination: impl Into<String>,
        duration: i32,
        time_band: i32,
    ) -> AppResult<Self> {
        let time_band = TimeBand::try_from(time_band)?;
        Self::new(origin, destination, duration, CallKind::Provincial { time_band })
    }

    /// Create a call of any kind
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        duration: i32,
        kind: CallKind,
    ) -> AppResult<Self> {
        if duration < 0 {
            return Err(AppError::InvalidParameter(format!(
                "call duration must not be negative (got {}s)",
                duration
            )));
        }

        Ok(Self {
            origin: origin.into(),
            destination: destination.into(),
            duration,
            kind,
        })
    }

    /// Calling number
    #[inline]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Called number
    #[inline]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Duration in seconds
    #[inline]
    pub fn duration(&self) -> i32 {
        self.duration
    }

    #[inline]
    pub fn kind(&self) -> &CallKind {
        &self.kind
    }

    /// Time band for provincial calls
    pub fn time_band(&self) -> Option<TimeBand> {
        match self.kind {
            CallKind::Provincial { time_band } => Some(time_band),
            CallKind::Local => None,
        }
    }

    #[inline]
    pub fn is_local(&self) -> bool {
        matches!(self.kind, CallKind::Local)
    }

    #[inline]
    pub fn is_provincial(&self) -> bool {
        matches!(self.kind, CallKind::Provincial { .. })
    }

    /// Cost under the standard tariff
    pub fn cost(&self) -> Decimal {
        self.cost_with(&Tariff::standard())
    }

    /// Cost under an arbitrary cost policy
    pub fn cost_with<P: CostPolicy + ?Sized>(&self, policy: &P) -> Decimal {
        let rate = policy.rate_for(&self.kind);
        let cost = Decimal::from(self.duration) * rate;
        debug!(
            "Cost for {} call {} -> {}: {}s at {}/s = {}",
            self.kind.as_str(),
            self.origin,
            self.destination,
            self.duration,
            rate,
            cost
        );
        cost
    }

    /// One-line description using the standard tariff
    pub fn describe(&self) -> String {
        self.describe_with(&Tariff::standard())
    }

    /// One-line description using an arbitrary cost policy
    pub fn describe_with<P: CostPolicy + ?Sized>(&self, policy: &P) -> String {
        format!(
            "Call from {} to {} - Duration: {}s - Cost: {} cents",
            self.origin,
            self.destination,
            self.duration,
            format_amount(self.cost_with(policy))
        )
    }

    /// Duration formatted as MM:SS
    pub fn effective_duration(&self) -> String {
        let mins = self.duration / 60;
        let secs = self.duration % 60;
        format!("{:02}:{:02}", mins, secs)
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_local_call_cost() {
        let call = Call::local("123456789", "987654321", 120).unwrap();
        assert_eq!(call.cost(), dec!(18.00));

        for duration in [0, 1, 59, 3600] {
            let call = Call::local("1", "2", duration).unwrap();
            assert_eq!(call.cost(), Decimal::from(duration) * dec!(0.15));
        }
    }

    #[test]
    fn test_provincial_call_cost_per_band() {
        let expected = [(1, dec!(0.20)), (2, dec!(0.25)), (3, dec!(0.30))];

        for (band, rate) in expected {
            let call = Call::provincial("1", "2", 100, band).unwrap();
            assert_eq!(call.cost(), dec!(100) * rate);
            assert_eq!(call.time_band().map(|b| b.as_number()), Some(band));
        }
    }

    #[test]
    fn test_invalid_time_band() {
        for band in [0, 4, -3] {
            let result = Call::provincial("123456789", "654987321", 100, band);
            assert!(matches!(result, Err(AppError::InvalidParameter(_))));
        }
    }

    #[test]
    fn test_negative_duration_rejected() {
        assert!(matches!(
            Call::local("1", "2", -1),
            Err(AppError::InvalidParameter(_))
        ));
        assert!(matches!(
            Call::provincial("1", "2", -60, 2),
            Err(AppError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_zero_duration_is_free() {
        let call = Call::provincial("1", "2", 0, 3).unwrap();
        assert_eq!(call.cost(), Decimal::ZERO);
    }

    #[test]
    fn test_describe() {
        let call = Call::local("123456789", "987654321", 120).unwrap();
        assert_eq!(
            call.describe(),
            "Call from 123456789 to 987654321 - Duration: 120s - Cost: 18.00 cents"
        );
        assert_eq!(call.to_string(), call.describe());

        let call = Call::provincial("987654321", "321654987", 80, 3).unwrap();
        assert_eq!(
            call.describe(),
            "Call from 987654321 to 321654987 - Duration: 80s - Cost: 24.00 cents"
        );
    }

    #[test]
    fn test_cost_with_custom_tariff() {
        let tariff = Tariff::new(dec!(0.10), dec!(0.20), dec!(0.40), dec!(0.50)).unwrap();
        let local = Call::local("1", "2", 30).unwrap();
        let provincial = Call::provincial("1", "2", 30, 2).unwrap();

        assert_eq!(local.cost_with(&tariff), dec!(3.00));
        assert_eq!(provincial.cost_with(&tariff), dec!(12.00));
        assert!(provincial.describe_with(&tariff).ends_with("Cost: 12.00 cents"));
    }

    #[test]
    fn test_kind_accessors() {
        let local = Call::local("1", "2", 10).unwrap();
        assert!(local.is_local());
        assert!(!local.is_provincial());
        assert_eq!(local.time_band(), None);
        assert_eq!(local.kind().as_str(), "local");

        let provincial = Call::provincial("1", "2", 10, 1).unwrap();
        assert!(provincial.is_provincial());
        assert_eq!(provincial.kind().to_string(), "provincial (band 1)");
    }

    #[test]
    fn test_effective_duration() {
        let call = Call::local("1", "2", 125).unwrap();
        assert_eq!(call.effective_duration(), "02:05");
    }

    #[test]
    fn test_call_serialization() {
        let call = Call::provincial("1", "2", 80, 3).unwrap();
        let json = serde_json::to_value(&call).unwrap();
        assert_eq!(json["origin"], "1");
        assert_eq!(json["duration"], 80);
        assert_eq!(json["kind"]["type"], "provincial");
        assert_eq!(json["kind"]["time_band"], 3);
    }
}
