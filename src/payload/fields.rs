//! Typed field readers over a loosely-typed JSON object.
//!
//! Absent keys and explicit `null` resolve to the field's default. Keys that
//! are present with an incompatible JSON type are rejected with
//! `DecodeError::MalformedPayload`; no cross-type coercion is attempted.

use serde_json::{Map, Value};

use crate::error_handling::{DecodeError, FieldKind};

type Object = Map<String, Value>;

/// Returns the value stored under `key`, treating `null` as absent.
fn present<'a>(object: &'a Object, key: &str) -> Option<&'a Value> {
    object.get(key).filter(|value| !value.is_null())
}

pub(crate) fn read_string(object: &Object, key: &'static str) -> Result<String, DecodeError> {
    match present(object, key) {
        None => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(DecodeError::malformed(key, FieldKind::String, other)),
    }
}

/// Reads a field that must be a string and has no default.
pub(crate) fn require_string<'a>(
    object: &'a Object,
    key: &'static str,
) -> Result<&'a str, DecodeError> {
    match object.get(key) {
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(other) => Err(DecodeError::malformed(key, FieldKind::String, other)),
        None => Err(DecodeError::MalformedPayload {
            field: key,
            expected: FieldKind::String,
            found: "absent",
        }),
    }
}

pub(crate) fn read_f64(object: &Object, key: &'static str) -> Result<f64, DecodeError> {
    match present(object, key) {
        None => Ok(0.0),
        Some(value @ Value::Number(n)) => n
            .as_f64()
            .filter(|f| f.is_finite())
            .ok_or_else(|| DecodeError::malformed(key, FieldKind::Number, value)),
        Some(other) => Err(DecodeError::malformed(key, FieldKind::Number, other)),
    }
}

/// Reads a whole-second value, truncating fractional numbers toward zero.
pub(crate) fn read_seconds(object: &Object, key: &'static str) -> Result<i64, DecodeError> {
    match present(object, key) {
        None => Ok(0),
        Some(value @ Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            // u64 above i64::MAX, or a float
            match n.as_f64() {
                Some(f) if f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                    Ok(f.trunc() as i64)
                }
                _ => Err(DecodeError::malformed(key, FieldKind::Integer, value)),
            }
        }
        Some(other) => Err(DecodeError::malformed(key, FieldKind::Integer, other)),
    }
}

pub(crate) fn read_bool(object: &Object, key: &'static str) -> Result<bool, DecodeError> {
    match present(object, key) {
        None => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(other) => Err(DecodeError::malformed(key, FieldKind::Boolean, other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Object {
        match value {
            Value::Object(map) => map,
            _ => panic!("test fixture must be an object"),
        }
    }

    #[test]
    fn test_read_string_defaults_when_absent_or_null() {
        let obj = object(json!({ "city": null }));
        assert_eq!(read_string(&obj, "city").unwrap(), "");
        assert_eq!(read_string(&obj, "zip").unwrap(), "");
    }

    #[test]
    fn test_read_string_rejects_number() {
        let obj = object(json!({ "zip": 20149 }));
        let err = read_string(&obj, "zip").unwrap_err();
        assert!(matches!(
            err,
            DecodeError::MalformedPayload {
                field: "zip",
                expected: FieldKind::String,
                found: "number",
            }
        ));
        assert_eq!(
            err.to_string(),
            "Malformed payload: field `zip` expected string, found number"
        );
    }

    #[test]
    fn test_require_string_distinguishes_absent_and_null() {
        let obj = object(json!({ "status": null }));
        assert!(matches!(
            require_string(&obj, "status"),
            Err(DecodeError::MalformedPayload { found: "null", .. })
        ));

        let empty = Object::new();
        assert!(matches!(
            require_string(&empty, "status"),
            Err(DecodeError::MalformedPayload { found: "absent", .. })
        ));
    }

    #[test]
    fn test_read_f64_accepts_integers_and_floats() {
        let obj = object(json!({ "lat": 37, "lon": -97.822 }));
        assert_eq!(read_f64(&obj, "lat").unwrap(), 37.0);
        assert_eq!(read_f64(&obj, "lon").unwrap(), -97.822);
    }

    #[test]
    fn test_read_f64_does_not_coerce_numeric_strings() {
        let obj = object(json!({ "lat": "37.751" }));
        assert!(matches!(
            read_f64(&obj, "lat"),
            Err(DecodeError::MalformedPayload {
                field: "lat",
                expected: FieldKind::Number,
                found: "string",
            })
        ));
    }

    #[test]
    fn test_read_seconds_truncates_toward_zero() {
        let obj = object(json!({ "a": -18000, "b": 3600.9, "c": -3600.9 }));
        assert_eq!(read_seconds(&obj, "a").unwrap(), -18000);
        assert_eq!(read_seconds(&obj, "b").unwrap(), 3600);
        assert_eq!(read_seconds(&obj, "c").unwrap(), -3600);
    }

    #[test]
    fn test_read_seconds_rejects_out_of_range() {
        let obj = object(json!({ "offset": u64::MAX, "big": 1e300 }));
        assert!(read_seconds(&obj, "offset").is_err());
        assert!(read_seconds(&obj, "big").is_err());
    }

    #[test]
    fn test_read_bool_rejects_string_flag() {
        let obj = object(json!({ "proxy": "false", "mobile": true }));
        assert!(read_bool(&obj, "mobile").unwrap());
        assert!(!read_bool(&obj, "hosting").unwrap());
        assert!(matches!(
            read_bool(&obj, "proxy"),
            Err(DecodeError::MalformedPayload {
                field: "proxy",
                expected: FieldKind::Boolean,
                found: "string",
            })
        ));
    }
}
