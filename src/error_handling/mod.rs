//! Error handling and decode statistics.
//!
//! This module provides:
//! - Error type definitions (decode, query, initialization)
//! - Outcome classification for batch runs
//! - Per-outcome statistics tracking
//!
//! A payload ends up in one of four kinds:
//! - **Success**: decoded into an `IpInfoRecord`
//! - **ServiceFailure**: decoded into an `ErrorRecord` reported by the service
//! - **Malformed**: a field had the wrong type, the payload is untrusted
//! - **InvalidJson**: the input was not JSON

mod stats;
mod types;

// Re-export public API
pub use stats::DecodeStats;
pub use types::{
    DecodeError, FieldKind, InitializationError, OutcomeKind, QueryError, ServiceFailure,
};
