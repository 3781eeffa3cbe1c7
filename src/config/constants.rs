//! Configuration constants.
//!
//! This module defines the upstream service contract (status values, field
//! list, default endpoint) and input limits.

/// Status value that selects the success record.
pub const STATUS_SUCCESS: &str = "success";

/// Status used by a lookup front end for its own error responses.
pub const STATUS_ERROR: &str = "error";

/// Default base URL of the upstream geolocation service.
pub const DEFAULT_BASE_URL: &str = "http://ip-api.com";

/// Environment variable that overrides `DEFAULT_BASE_URL`.
pub const BASE_URL_ENV: &str = "IP_LOOKUP_BASE_URL";

/// Route prefix of the lookup endpoint, e.g. `/api/lookup/8.8.8.8`.
pub const LOOKUP_ROUTE_PREFIX: &str = "/api/lookup/";

/// Fields requested from the upstream service, in request order.
pub const LOOKUP_FIELDS: &[&str] = &[
    "status",
    "message",
    "continent",
    "continentCode",
    "country",
    "countryCode",
    "region",
    "regionName",
    "city",
    "district",
    "zip",
    "lat",
    "lon",
    "timezone",
    "offset",
    "currency",
    "isp",
    "org",
    "as",
    "asname",
    "mobile",
    "proxy",
    "hosting",
    "query",
];

/// Maximum length of one JSON Lines entry (64KB).
/// A full lookup response is well under 1KB; longer lines are rejected
/// without being parsed.
pub const MAX_PAYLOAD_LINE_LENGTH: usize = 64 * 1024;

/// Exit code when the configured failure policy is violated.
pub const EXIT_POLICY_VIOLATION: i32 = 2;

/// Exit code when the input contained no payloads.
pub const EXIT_EMPTY_INPUT: i32 = 3;
