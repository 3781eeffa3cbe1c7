//! Response envelope handed to the presentation layer.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::payload::IpInfoRecord;

/// Successful lookup together with the request headers the caller sent.
///
/// Serializes with the keys `IPInfo` and `HeaderInfo`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupResponse {
    #[serde(rename = "IPInfo")]
    pub ip_info: IpInfoRecord,
    /// Header name to every value received for it
    #[serde(rename = "HeaderInfo")]
    pub header_info: BTreeMap<String, Vec<String>>,
}

impl LookupResponse {
    /// Builds an envelope, grouping repeated headers under one name.
    pub fn new<I, K, V>(ip_info: IpInfoRecord, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut header_info: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (name, value) in headers {
            header_info.entry(name.into()).or_default().push(value.into());
        }
        Self {
            ip_info,
            header_info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::{decode_str, LookupOutcome};

    fn minimal_info() -> IpInfoRecord {
        match decode_str(r#"{"status":"success","query":"1.1.1.1","country":"Australia"}"#) {
            Ok(LookupOutcome::Success(info)) => info,
            other => panic!("unexpected decode result: {other:?}"),
        }
    }

    #[test]
    fn test_envelope_groups_repeated_headers() {
        let response = LookupResponse::new(
            minimal_info(),
            [
                ("Accept", "text/html"),
                ("X-Forwarded-For", "1.1.1.1"),
                ("Accept", "application/json"),
            ],
        );
        assert_eq!(
            response.header_info["Accept"],
            vec!["text/html".to_string(), "application/json".to_string()]
        );
        assert_eq!(response.header_info.len(), 2);
    }

    #[test]
    fn test_envelope_serializes_with_service_keys() {
        let response = LookupResponse::new(minimal_info(), Vec::<(String, String)>::new());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["IPInfo"]["query"], "1.1.1.1");
        assert_eq!(json["IPInfo"]["country"], "Australia");
        assert_eq!(json["HeaderInfo"], serde_json::json!({}));
    }
}
