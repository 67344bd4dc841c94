//! Tariff model
//!
//! Per-second rates for local calls and for each provincial time band.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AppError;
use crate::models::CallKind;
use crate::traits::CostPolicy;
use crate::AppResult;

/// Provincial pricing tier
///
/// Serialized as its numeric value (1, 2 or 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum TimeBand {
    First,
    Second,
    Third,
}

impl TimeBand {
    /// Numeric value of the band (1..=3)
    #[inline]
    pub fn as_number(&self) -> i32 {
        match self {
            TimeBand::First => 1,
            TimeBand::Second => 2,
            TimeBand::Third => 3,
        }
    }
}

impl TryFrom<i32> for TimeBand {
    type Error = AppError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(TimeBand::First),
            2 => Ok(TimeBand::Second),
            3 => Ok(TimeBand::Third),
            other => Err(AppError::InvalidParameter(format!(
                "time band {} is not valid (expected 1, 2 or 3)",
                other
            ))),
        }
    }
}

impl From<TimeBand> for i32 {
    fn from(band: TimeBand) -> Self {
        band.as_number()
    }
}

impl fmt::Display for TimeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_number())
    }
}

/// Highest accepted per-second rate, in cents
///
/// Keeps `i32::MAX` seconds times any rate well inside `Decimal`'s range.
pub const MAX_RATE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Tariff entity
///
/// Holds the per-second rate applied to each kind of call. Rates are
/// expressed in cents and lie in `0..=MAX_RATE`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tariff {
    /// Rate per second for local calls
    pub local_rate: Decimal,

    /// Rate per second for provincial calls in band 1
    pub band1_rate: Decimal,

    /// Rate per second for provincial calls in band 2
    pub band2_rate: Decimal,

    /// Rate per second for provincial calls in band 3
    pub band3_rate: Decimal,
}

impl Tariff {
    /// Create a tariff, rejecting negative rates and rates above `MAX_RATE`
    pub fn new(
        local_rate: Decimal,
        band1_rate: Decimal,
        band2_rate: Decimal,
        band3_rate: Decimal,
    ) -> AppResult<Self> {
        let rates = [
            ("local_rate", local_rate),
            ("band1_rate", band1_rate),
            ("band2_rate", band2_rate),
            ("band3_rate", band3_rate),
        ];

        if let Some((name, rate)) = rates.iter().find(|(_, rate)| rate.is_sign_negative()) {
            return Err(AppError::InvalidParameter(format!(
                "{} must not be negative (got {})",
                name, rate
            )));
        }

        if let Some((name, rate)) = rates.iter().find(|(_, rate)| *rate > MAX_RATE) {
            return Err(AppError::InvalidParameter(format!(
                "{} must not exceed {} (got {})",
                name, MAX_RATE, rate
            )));
        }

        Ok(Self {
            local_rate,
            band1_rate,
            band2_rate,
            band3_rate,
        })
    }

    /// The fixed tariff: 0.15 local, 0.20 / 0.25 / 0.30 per band
    pub fn standard() -> Self {
        Self {
            local_rate: Decimal::new(15, 2),
            band1_rate: Decimal::new(20, 2),
            band2_rate: Decimal::new(25, 2),
            band3_rate: Decimal::new(30, 2),
        }
    }

    /// Rate per second for a provincial time band
    #[inline]
    pub fn rate_for_band(&self, band: TimeBand) -> Decimal {
        match band {
            TimeBand::First => self.band1_rate,
            TimeBand::Second => self.band2_rate,
            TimeBand::Third => self.band3_rate,
        }
    }
}

impl Default for Tariff {
    fn default() -> Self {
        Self::standard()
    }
}

impl CostPolicy for Tariff {
    fn rate_for(&self, kind: &CallKind) -> Decimal {
        match kind {
            CallKind::Local => self.local_rate,
            CallKind::Provincial { time_band } => self.rate_for_band(*time_band),
        }
    }
}

/// Format a monetary amount with two decimals, rounding half away from zero
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_time_band_from_number() {
        assert_eq!(TimeBand::try_from(1).unwrap(), TimeBand::First);
        assert_eq!(TimeBand::try_from(2).unwrap(), TimeBand::Second);
        assert_eq!(TimeBand::try_from(3).unwrap(), TimeBand::Third);
    }

    #[test]
    fn test_time_band_out_of_range() {
        for value in [0, 4, -1, i32::MAX] {
            let err = TimeBand::try_from(value).unwrap_err();
            assert!(matches!(err, AppError::InvalidParameter(_)));
        }
    }

    #[test]
    fn test_time_band_serializes_as_number() {
        assert_eq!(serde_json::to_string(&TimeBand::Third).unwrap(), "3");
        let band: TimeBand = serde_json::from_str("2").unwrap();
        assert_eq!(band, TimeBand::Second);
        assert!(serde_json::from_str::<TimeBand>("7").is_err());
    }

    #[test]
    fn test_standard_rates() {
        let tariff = Tariff::standard();
        assert_eq!(tariff.rate_for(&CallKind::Local), dec!(0.15));
        assert_eq!(tariff.rate_for_band(TimeBand::First), dec!(0.20));
        assert_eq!(tariff.rate_for_band(TimeBand::Second), dec!(0.25));
        assert_eq!(tariff.rate_for_band(TimeBand::Third), dec!(0.30));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let result = Tariff::new(dec!(0.15), dec!(0.20), dec!(-0.01), dec!(0.30));
        match result {
            Err(AppError::InvalidParameter(msg)) => assert!(msg.contains("band2_rate")),
            other => panic!("expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_oversized_rate_rejected() {
        let huge = Decimal::from_i128_with_scale(100_000_000_000_000_000_000, 0);
        let result = Tariff::new(huge, dec!(0.20), dec!(0.25), dec!(0.30));
        match result {
            Err(AppError::InvalidParameter(msg)) => assert!(msg.contains("local_rate")),
            other => panic!("expected InvalidParameter, got {:?}", other),
        }

        assert!(Tariff::new(MAX_RATE, MAX_RATE, MAX_RATE, MAX_RATE).is_ok());
    }

    #[test]
    fn test_longest_call_at_max_rate_does_not_overflow() {
        let tariff = Tariff::new(MAX_RATE, MAX_RATE, MAX_RATE, MAX_RATE).unwrap();
        let call = crate::models::Call::local("1", "2", i32::MAX).unwrap();
        assert_eq!(call.cost_with(&tariff), Decimal::from(i32::MAX) * MAX_RATE);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(dec!(18)), "18.00");
        assert_eq!(format_amount(dec!(62.000)), "62.00");
        assert_eq!(format_amount(dec!(0.125)), "0.13");
        assert_eq!(format_amount(Decimal::ZERO), "0.00");
    }
}
