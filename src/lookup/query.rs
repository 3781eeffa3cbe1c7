//! Lookup query validation.

use std::net::IpAddr;

use log::debug;

use crate::config::LOOKUP_ROUTE_PREFIX;
use crate::error_handling::QueryError;

/// Validates a user-supplied lookup query.
///
/// Surrounding whitespace is ignored. Only IPv4 and IPv6 literals are
/// accepted.
///
/// # Errors
///
/// * `QueryError::Missing` if the query is empty after trimming
/// * `QueryError::InvalidFormat` if it is not an IP address
pub fn validate_query(raw: &str) -> Result<IpAddr, QueryError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(QueryError::Missing);
    }
    trimmed.parse::<IpAddr>().map_err(|_| {
        debug!("Rejecting lookup query that is not an IP address: {trimmed}");
        QueryError::InvalidFormat(trimmed.to_string())
    })
}

/// Extracts and validates the query from a lookup route path such as
/// `/api/lookup/8.8.8.8`.
pub fn query_from_path(path: &str) -> Result<IpAddr, QueryError> {
    let query = path.strip_prefix(LOOKUP_ROUTE_PREFIX).unwrap_or(path);
    validate_query(query)
}
