//! Payload input reading.
//!
//! Input is either one JSON document (an object, or an array of objects) or
//! JSON Lines. In JSON Lines mode blank lines and `#` comments are skipped.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};
use serde_json::Value;

use crate::config::MAX_PAYLOAD_LINE_LENGTH;

/// One payload read from the input, or the reason it could not be parsed.
#[derive(Debug)]
pub struct PayloadEntry {
    /// 1-based position: line number for JSON Lines, element number otherwise
    pub position: usize,
    pub payload: Result<Value, serde_json::Error>,
}

/// Reads every payload from `path`, or from stdin when `path` is `-`.
///
/// # Errors
///
/// Returns an error if the input cannot be read or is not UTF-8. Payloads
/// that fail to parse are returned as entries, not as an error.
pub fn read_payloads(path: &Path) -> Result<Vec<PayloadEntry>> {
    let text = if path.as_os_str() == "-" {
        info!("Reading payloads from stdin");
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read payloads from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display()))?
    };
    Ok(parse_payloads(&text))
}

/// Splits raw input text into payload entries.
pub fn parse_payloads(text: &str) -> Vec<PayloadEntry> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(items)) => {
            debug!("Input is a JSON array of {} payloads", items.len());
            items
                .into_iter()
                .enumerate()
                .map(|(i, item)| PayloadEntry {
                    position: i + 1,
                    payload: Ok(item),
                })
                .collect()
        }
        Ok(document) => vec![PayloadEntry {
            position: 1,
            payload: Ok(document),
        }],
        Err(_) => parse_lines(text),
    }
}

fn parse_lines(text: &str) -> Vec<PayloadEntry> {
    let mut entries = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let payload = if trimmed.len() > MAX_PAYLOAD_LINE_LENGTH {
            Err(<serde_json::Error as serde::de::Error>::custom(format!(
                "line exceeds maximum length ({} > {})",
                trimmed.len(),
                MAX_PAYLOAD_LINE_LENGTH
            )))
        } else {
            serde_json::from_str(trimmed)
        };
        entries.push(PayloadEntry {
            position: index + 1,
            payload,
        });
    }
    debug!("Input read as JSON Lines ({} payloads)", entries.len());
    entries
}
