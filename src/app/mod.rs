//! Main application modules.
//!
//! This module provides input reading, outcome rendering and statistics
//! printing used by the batch decode run.

pub mod input;
pub mod output;
pub mod statistics;

// Re-export public API
pub use input::{parse_payloads, read_payloads, PayloadEntry};
pub use output::{render_text, write_outcome};
pub use statistics::{print_decode_statistics, summary_line};
