//! Application configuration and constants.
//!
//! This module provides:
//! - Upstream service constants (status values, field list, endpoint)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, FailOn, LogFormat, LogLevel, OutputFormat};
