//! Pure helpers around the upstream lookup service.
//!
//! This module provides:
//! - Query validation (IPv4/IPv6 literals only)
//! - Caller address resolution from proxy headers
//! - Upstream request URL construction
//! - The response envelope returned to the presentation layer
//!
//! Nothing here performs network I/O; callers own the transport.

mod client_ip;
mod query;
mod request;
mod response;

// Re-export public API
pub use client_ip::client_ip;
pub use query::{query_from_path, validate_query};
pub use request::{lookup_url, request_url};
pub use response::LookupResponse;
