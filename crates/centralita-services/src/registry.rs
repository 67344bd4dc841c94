//! Call registry
//!
//! Owns every registered call and keeps them in the order they were registered.

use centralita_core::{models::Call, traits::CallStore};
use std::slice;
use tracing::debug;

/// In-memory call registry
///
/// Append-only; calls are validated at construction so registration itself
/// never fails.
#[derive(Debug, Clone, Default)]
pub struct CallRegistry {
    calls: Vec<Call>,
}

impl CallRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a call at the end of the sequence
    pub fn register(&mut self, call: Call) {
        debug!(
            origin = call.origin(),
            destination = call.destination(),
            duration = call.duration(),
            kind = call.kind().as_str(),
            "Registering call #{}",
            self.calls.len() + 1
        );
        self.calls.push(call);
    }

    /// Registered calls in insertion order
    #[inline]
    pub fn list(&self) -> &[Call] {
        &self.calls
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Call> {
        self.calls.iter()
    }
}

impl CallStore for CallRegistry {
    fn register(&mut self, call: Call) {
        CallRegistry::register(self, call);
    }

    fn list(&self) -> &[Call] {
        CallRegistry::list(self)
    }
}

impl FromIterator<Call> for CallRegistry {
    fn from_iter<I: IntoIterator<Item = Call>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}

impl Extend<Call> for CallRegistry {
    fn extend<I: IntoIterator<Item = Call>>(&mut self, iter: I) {
        for call in iter {
            self.register(call);
        }
    }
}

impl<'a> IntoIterator for &'a CallRegistry {
    type Item = &'a Call;
    type IntoIter = slice::Iter<'a, Call>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
