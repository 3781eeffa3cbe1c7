//! Payload decoding.
//!
//! Turns a parsed lookup response body into a `LookupOutcome`. The `status`
//! field is the only discriminator: `"success"` selects `IpInfoRecord`, every
//! other value selects `ErrorRecord`.

use serde_json::{Map, Value};

use super::fields::{read_bool, read_f64, read_seconds, read_string, require_string};
use super::types::{ErrorRecord, IpInfoRecord, LookupOutcome};
use crate::config::STATUS_SUCCESS;
use crate::error_handling::{DecodeError, FieldKind};

/// Decodes one lookup payload.
///
/// Absent (or `null`) fields take their defaults: `""` for strings, `0` for
/// numbers, `false` for flags. A field that is present with the wrong JSON
/// type fails the whole decode; numbers sent as strings are not coerced.
///
/// # Errors
///
/// Returns `DecodeError::MalformedPayload` if `status` is missing or not a
/// string, or if any present field has an incompatible type.
///
/// # Examples
///
/// ```
/// use ip_lookup::{decode, LookupOutcome};
/// use serde_json::json;
///
/// let payload = json!({ "status": "fail", "message": "invalid query" });
/// let outcome = decode(payload.as_object().unwrap()).unwrap();
/// match outcome {
///     LookupOutcome::Failure(error) => assert_eq!(error.message, "invalid query"),
///     LookupOutcome::Success(_) => unreachable!(),
/// }
/// ```
pub fn decode(input: &Map<String, Value>) -> Result<LookupOutcome, DecodeError> {
    let status = require_string(input, "status")?;

    if status != STATUS_SUCCESS {
        return Ok(LookupOutcome::Failure(ErrorRecord {
            status: status.to_string(),
            message: read_string(input, "message")?,
        }));
    }

    Ok(LookupOutcome::Success(IpInfoRecord {
        query: read_string(input, "query")?,
        status: status.to_string(),
        continent: read_string(input, "continent")?,
        continent_code: read_string(input, "continentCode")?,
        country: read_string(input, "country")?,
        country_code: read_string(input, "countryCode")?,
        region: read_string(input, "region")?,
        region_name: read_string(input, "regionName")?,
        city: read_string(input, "city")?,
        district: read_string(input, "district")?,
        zip: read_string(input, "zip")?,
        lat: read_f64(input, "lat")?,
        lon: read_f64(input, "lon")?,
        timezone: read_string(input, "timezone")?,
        offset: read_seconds(input, "offset")?,
        currency: read_string(input, "currency")?,
        isp: read_string(input, "isp")?,
        org: read_string(input, "org")?,
        asn: read_string(input, "as")?,
        as_name: read_string(input, "asname")?,
        mobile: read_bool(input, "mobile")?,
        proxy: read_bool(input, "proxy")?,
        hosting: read_bool(input, "hosting")?,
    }))
}

/// Decodes a payload that has not yet been checked to be a JSON object.
pub fn decode_value(input: &Value) -> Result<LookupOutcome, DecodeError> {
    match input {
        Value::Object(object) => decode(object),
        other => Err(DecodeError::malformed("$", FieldKind::Object, other)),
    }
}

/// Parses and decodes a raw response body.
///
/// # Errors
///
/// Returns `DecodeError::InvalidJson` if `body` is not JSON, otherwise the
/// errors of [`decode`].
pub fn decode_str(body: &str) -> Result<LookupOutcome, DecodeError> {
    let value: Value = serde_json::from_str(body)?;
    decode_value(&value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode_json(value: Value) -> Result<LookupOutcome, DecodeError> {
        decode_value(&value)
    }

    fn full_success_payload() -> Value {
        json!({
            "query": "8.8.8.8",
            "status": "success",
            "continent": "North America",
            "continentCode": "NA",
            "country": "United States",
            "countryCode": "US",
            "region": "",
            "regionName": "",
            "city": "",
            "district": "",
            "zip": "",
            "lat": 37.751,
            "lon": -97.822,
            "timezone": "America/Chicago",
            "offset": -18000,
            "currency": "USD",
            "isp": "Google LLC",
            "org": "Google Public DNS",
            "as": "AS15169 Google LLC",
            "asname": "GOOGLE",
            "mobile": false,
            "proxy": false,
            "hosting": true
        })
    }

    #[test]
    fn test_decode_full_success_payload() {
        let outcome = decode_json(full_success_payload()).unwrap();
        let LookupOutcome::Success(info) = outcome else {
            panic!("expected success variant");
        };
        assert_eq!(info.query, "8.8.8.8");
        assert_eq!(info.status, "success");
        assert_eq!(info.continent_code, "NA");
        assert_eq!(info.country, "United States");
        assert_eq!(info.country_code, "US");
        assert_eq!(info.lat, 37.751);
        assert_eq!(info.lon, -97.822);
        assert_eq!(info.timezone, "America/Chicago");
        assert_eq!(info.offset, -18000);
        assert_eq!(info.currency, "USD");
        assert_eq!(info.asn, "AS15169 Google LLC");
        assert_eq!(info.as_name, "GOOGLE");
        assert!(!info.mobile);
        assert!(!info.proxy);
        assert!(info.hosting);
    }

    #[test]
    fn test_decode_success_serializes_back_to_input() {
        let payload = full_success_payload();
        let outcome = decode_json(payload.clone()).unwrap();
        assert_eq!(serde_json::to_value(&outcome).unwrap(), payload);
    }

    #[test]
    fn test_decode_status_only_uses_defaults() {
        let outcome = decode_json(json!({ "status": "success" })).unwrap();
        let LookupOutcome::Success(info) = outcome else {
            panic!("expected success variant");
        };
        assert_eq!(info.query, "");
        assert_eq!(info.city, "");
        assert_eq!(info.asn, "");
        assert_eq!(info.lat, 0.0);
        assert_eq!(info.lon, 0.0);
        assert_eq!(info.offset, 0);
        assert!(!info.mobile && !info.proxy && !info.hosting);
    }

    #[test]
    fn test_decode_fail_status() {
        let outcome = decode_json(json!({ "status": "fail", "message": "invalid query" })).unwrap();
        assert_eq!(
            outcome,
            LookupOutcome::Failure(ErrorRecord {
                status: "fail".to_string(),
                message: "invalid query".to_string(),
            })
        );
    }

    #[test]
    fn test_decode_any_other_status_is_failure() {
        for status in ["error", "", "Success", "SUCCESS", "ok"] {
            let outcome = decode_json(json!({ "status": status })).unwrap();
            assert_eq!(
                outcome,
                LookupOutcome::Failure(ErrorRecord {
                    status: status.to_string(),
                    message: String::new(),
                }),
                "status {status:?} should route to the error variant"
            );
        }
    }

    #[test]
    fn test_decode_failure_ignores_success_fields() {
        let outcome =
            decode_json(json!({ "status": "fail", "message": "private range", "lat": "x" }))
                .unwrap();
        assert!(!outcome.is_success());
    }

    #[test]
    fn test_decode_failure_rejects_non_string_message() {
        let err = decode_json(json!({ "status": "fail", "message": 42 })).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::MalformedPayload { field: "message", .. }
        ));
    }

    #[test]
    fn test_decode_rejects_missing_or_non_string_status() {
        assert!(matches!(
            decode_json(json!({ "message": "no status" })),
            Err(DecodeError::MalformedPayload { field: "status", .. })
        ));
        assert!(matches!(
            decode_json(json!({ "status": true })),
            Err(DecodeError::MalformedPayload {
                field: "status",
                found: "boolean",
                ..
            })
        ));
    }

    #[test]
    fn test_decode_rejects_non_numeric_coordinates() {
        for field in ["lat", "lon", "offset"] {
            let mut payload = json!({ "status": "success" });
            payload[field] = json!("not-a-number");
            let err = decode_json(payload).unwrap_err();
            assert!(
                matches!(err, DecodeError::MalformedPayload { field: f, .. } if f == field),
                "{field} should be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn test_decode_truncates_fractional_offset() {
        let outcome = decode_json(json!({ "status": "success", "offset": 19800.5 })).unwrap();
        let LookupOutcome::Success(info) = outcome else {
            panic!("expected success variant");
        };
        assert_eq!(info.offset, 19800);
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let outcome =
            decode_json(json!({ "status": "success", "reverse": "dns.google", "extra": [1, 2] }))
                .unwrap();
        assert!(outcome.is_success());
    }

    #[test]
    fn test_decode_value_rejects_non_object() {
        let err = decode_json(json!(["status", "success"])).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::MalformedPayload {
                field: "$",
                expected: FieldKind::Object,
                found: "array",
            }
        ));
    }

    #[test]
    fn test_decode_str_reports_invalid_json() {
        let err = decode_str(r#"{"status": "success""#).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidJson(_)));
    }

    #[test]
    fn test_decode_is_idempotent() {
        let payload = full_success_payload();
        assert_eq!(decode_json(payload.clone()).unwrap(), decode_json(payload).unwrap());
    }
}
