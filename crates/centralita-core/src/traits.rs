//! Common traits for cost policies and call storage
//!
//! Defines the seams between the call model, the registry and reporting.

use rust_decimal::Decimal;

use crate::models::{Call, CallKind};

/// Pricing policy mapping a call type to its per-second rate
pub trait CostPolicy {
    /// Rate per second for the given call kind
    fn rate_for(&self, kind: &CallKind) -> Decimal;

    /// Total cost of a call under this policy
    fn cost_of(&self, call: &Call) -> Decimal {
        call.cost_with(self)
    }
}

/// Ordered, append-only collection of calls
pub trait CallStore {
    /// Append a call, keeping insertion order
    fn register(&mut self, call: Call);

    /// Stored calls in insertion order
    fn list(&self) -> &[Call];

    /// Number of stored calls
    fn len(&self) -> usize {
        self.list().len()
    }

    /// Whether no call has been registered yet
    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}
