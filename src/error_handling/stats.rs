//! Decode statistics tracking.
//!
//! Counts how each payload of a batch ended up, one counter per `OutcomeKind`.

use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::types::OutcomeKind;

/// Per-kind outcome counters for one batch run.
///
/// Every `OutcomeKind` is initialized to zero on creation.
#[derive(Debug, Clone)]
pub struct DecodeStats {
    counts: HashMap<OutcomeKind, usize>,
}

impl DecodeStats {
    pub fn new() -> Self {
        let mut counts = HashMap::new();
        for kind in OutcomeKind::iter() {
            counts.insert(kind, 0);
        }
        DecodeStats { counts }
    }

    /// Increment the counter for `kind`.
    pub fn increment(&mut self, kind: OutcomeKind) {
        *self.counts.entry(kind).or_insert(0) += 1;
    }

    /// Get the count for an outcome kind.
    pub fn get_count(&self, kind: OutcomeKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Total number of payloads seen.
    pub fn total(&self) -> usize {
        OutcomeKind::iter().map(|k| self.get_count(k)).sum()
    }

    /// Payloads that were rejected by the decoder (malformed or not JSON).
    pub fn total_rejected(&self) -> usize {
        self.get_count(OutcomeKind::Malformed) + self.get_count(OutcomeKind::InvalidJson)
    }
}

impl Default for DecodeStats {
    fn default() -> Self {
        Self::new()
    }
}
