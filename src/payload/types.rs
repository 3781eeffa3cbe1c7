//! Typed lookup records.
//!
//! This module defines the two outcomes a lookup payload can decode into and
//! the tagged union that holds exactly one of them.

use serde::Serialize;

use crate::config::STATUS_ERROR;
use crate::error_handling::ServiceFailure;

/// Successful geolocation result for a queried IP address or hostname.
///
/// Field names serialize to the upstream wire names (`continentCode`, `as`, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IpInfoRecord {
    /// Queried IP address or hostname
    pub query: String,
    /// Discriminator, always `"success"` for this record
    pub status: String,
    pub continent: String,
    pub continent_code: String,
    pub country: String,
    pub country_code: String,
    pub region: String,
    pub region_name: String,
    pub city: String,
    pub district: String,
    pub zip: String,
    pub lat: f64,
    pub lon: f64,
    /// IANA timezone name
    pub timezone: String,
    /// UTC offset in seconds
    pub offset: i64,
    /// ISO currency code, or empty
    pub currency: String,
    pub isp: String,
    pub org: String,
    /// Autonomous system number and name, e.g. `AS15169 Google LLC`
    #[serde(rename = "as")]
    pub asn: String,
    #[serde(rename = "asname")]
    pub as_name: String,
    pub mobile: bool,
    pub proxy: bool,
    pub hosting: bool,
}

impl IpInfoRecord {
    /// Human-readable "city, region, country", skipping empty parts.
    pub fn location(&self) -> String {
        [
            self.city.as_str(),
            self.region_name.as_str(),
            self.country.as_str(),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }
}

/// Failure reported by the lookup service (or by a service built on top of it).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorRecord {
    /// Any status other than `"success"`, preserved as received
    pub status: String,
    /// Human-readable failure reason
    pub message: String,
}

impl ErrorRecord {
    /// Builds the error response a lookup front end returns for its own failures.
    pub fn service_error(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR.to_string(),
            message: message.into(),
        }
    }
}

/// Result of decoding one lookup payload.
///
/// Serializes untagged, so the JSON form is the upstream wire shape of the
/// contained record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LookupOutcome {
    Success(IpInfoRecord),
    Failure(ErrorRecord),
}

impl LookupOutcome {
    /// The discriminator value this outcome was decoded from.
    pub fn status(&self) -> &str {
        match self {
            LookupOutcome::Success(info) => info.status.as_str(),
            LookupOutcome::Failure(error) => error.status.as_str(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, LookupOutcome::Success(_))
    }

    /// Converts the outcome into a `Result`, treating any service-reported
    /// failure as an error.
    pub fn into_result(self) -> Result<IpInfoRecord, ServiceFailure> {
        match self {
            LookupOutcome::Success(info) => Ok(info),
            LookupOutcome::Failure(record) => Err(ServiceFailure { record }),
        }
    }
}

impl From<IpInfoRecord> for LookupOutcome {
    fn from(info: IpInfoRecord) -> Self {
        LookupOutcome::Success(info)
    }
}

impl From<ErrorRecord> for LookupOutcome {
    fn from(error: ErrorRecord) -> Self {
        LookupOutcome::Failure(error)
    }
}
