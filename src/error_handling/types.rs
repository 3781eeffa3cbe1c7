//! Error type definitions.
//!
//! This module defines the decode, query and initialization errors plus the
//! outcome kinds tallied while decoding a batch of payloads.

use log::SetLoggerError;
use serde_json::Value;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::payload::ErrorRecord;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// JSON type a payload field is declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Number,
    Integer,
    Boolean,
    Object,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
            FieldKind::Integer => "integer",
            FieldKind::Boolean => "boolean",
            FieldKind::Object => "object",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced while decoding a lookup payload.
///
/// A service-reported failure is not a `DecodeError`: it decodes successfully
/// into `LookupOutcome::Failure`.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// A field is missing where it is mandatory, or present with an
    /// incompatible type. The payload should not be trusted.
    #[error("Malformed payload: field `{field}` expected {expected}, found {found}")]
    MalformedPayload {
        field: &'static str,
        expected: FieldKind,
        found: &'static str,
    },

    /// The raw body is not JSON at all.
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl DecodeError {
    pub(crate) fn malformed(field: &'static str, expected: FieldKind, found: &Value) -> Self {
        DecodeError::MalformedPayload {
            field,
            expected,
            found: json_kind(found),
        }
    }
}

/// Name of the JSON type of `value`, used in diagnostics.
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Errors validating a lookup query before it is sent upstream.
///
/// Messages match the error responses a lookup front end returns to its
/// clients.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("IP address is required")]
    Missing,

    #[error("Invalid IP address format")]
    InvalidFormat(String),
}

/// A payload decoded into the error variant, surfaced as a Rust error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("API returned error status: {}", .record.status)]
pub struct ServiceFailure {
    pub record: ErrorRecord,
}

/// How a single payload in a batch ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum OutcomeKind {
    /// Decoded into `IpInfoRecord`
    Success,
    /// Decoded into `ErrorRecord`
    ServiceFailure,
    /// Rejected with `DecodeError::MalformedPayload`
    Malformed,
    /// Not parseable as JSON
    InvalidJson,
}

impl OutcomeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeKind::Success => "Success",
            OutcomeKind::ServiceFailure => "Service-reported failure",
            OutcomeKind::Malformed => "Malformed payload",
            OutcomeKind::InvalidJson => "Invalid JSON",
        }
    }

    /// Classifies a decode result.
    pub fn of(result: &Result<crate::payload::LookupOutcome, DecodeError>) -> Self {
        match result {
            Ok(outcome) if outcome.is_success() => OutcomeKind::Success,
            Ok(_) => OutcomeKind::ServiceFailure,
            Err(DecodeError::MalformedPayload { .. }) => OutcomeKind::Malformed,
            Err(DecodeError::InvalidJson(_)) => OutcomeKind::InvalidJson,
        }
    }
}

impl std::fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
