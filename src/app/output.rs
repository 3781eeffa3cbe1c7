//! Rendering of decoded outcomes.

use std::io::{self, Write};

use crate::config::OutputFormat;
use crate::payload::{IpInfoRecord, LookupOutcome};

/// Writes one line describing `outcome` in the requested format.
pub fn write_outcome<W: Write>(
    out: &mut W,
    outcome: &LookupOutcome,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, outcome)?;
            writeln!(out)
        }
        OutputFormat::Text => writeln!(out, "{}", render_text(outcome)),
    }
}

/// Single-line human-readable form of an outcome.
pub fn render_text(outcome: &LookupOutcome) -> String {
    match outcome {
        LookupOutcome::Success(info) => render_info(info),
        LookupOutcome::Failure(error) if error.message.is_empty() => error.status.clone(),
        LookupOutcome::Failure(error) => format!("{}: {}", error.status, error.message),
    }
}

fn render_info(info: &IpInfoRecord) -> String {
    let mut line = if info.query.is_empty() {
        "(self)".to_string()
    } else {
        info.query.clone()
    };

    let location = info.location();
    line.push_str(": ");
    line.push_str(if location.is_empty() {
        "unknown location"
    } else {
        location.as_str()
    });

    if !info.asn.is_empty() {
        line.push_str(&format!(" ({})", info.asn));
    }

    let flags: Vec<&str> = [
        (info.mobile, "mobile"),
        (info.proxy, "proxy"),
        (info.hosting, "hosting"),
    ]
    .into_iter()
    .filter_map(|(set, name)| set.then_some(name))
    .collect();
    if !flags.is_empty() {
        line.push_str(&format!(" [{}]", flags.join(", ")));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::decode_str;

    fn outcome(body: &str) -> LookupOutcome {
        decode_str(body).unwrap()
    }

    #[test]
    fn test_render_success_line() {
        let line = render_text(&outcome(
            r#"{"status":"success","query":"8.8.8.8","city":"Ashburn","regionName":"Virginia",
                "country":"United States","as":"AS15169 Google LLC","hosting":true}"#,
        ));
        assert_eq!(
            line,
            "8.8.8.8: Ashburn, Virginia, United States (AS15169 Google LLC) [hosting]"
        );
    }

    #[test]
    fn test_render_bare_success_line() {
        assert_eq!(
            render_text(&outcome(r#"{"status":"success"}"#)),
            "(self): unknown location"
        );
    }

    #[test]
    fn test_render_failure_line() {
        assert_eq!(
            render_text(&outcome(r#"{"status":"fail","message":"invalid query"}"#)),
            "fail: invalid query"
        );
        assert_eq!(render_text(&outcome(r#"{"status":"fail"}"#)), "fail");
    }

    #[test]
    fn test_write_outcome_json_is_one_line() {
        let mut buf = Vec::new();
        write_outcome(
            &mut buf,
            &outcome(r#"{"status":"fail","message":"reserved range"}"#),
            OutputFormat::Json,
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "{\"status\":\"fail\",\"message\":\"reserved range\"}\n"
        );
    }
}
