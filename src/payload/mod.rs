//! Lookup payload decoding.
//!
//! This module converts the loosely-typed body of an IP-geolocation lookup
//! response into one of two strongly typed records. The decoder performs no
//! I/O and holds no state, so it can be called from any thread.

mod decode;
mod fields;
mod types;

// Re-export public API
pub use decode::{decode, decode_str, decode_value};
pub use types::{ErrorRecord, IpInfoRecord, LookupOutcome};
