//! ip_lookup library: typed decoding of IP-geolocation lookup payloads
//!
//! This library converts the loosely-typed JSON body returned by an
//! IP-geolocation service into exactly one of two typed records: an
//! [`IpInfoRecord`] when the service reports `"success"`, or an
//! [`ErrorRecord`] for any other status. Payloads whose fields have the wrong
//! type are rejected with [`DecodeError::MalformedPayload`].
//!
//! # Example
//!
//! ```
//! use ip_lookup::{decode_str, LookupOutcome};
//!
//! let body = r#"{"status":"success","query":"8.8.8.8","country":"United States","hosting":true}"#;
//! match decode_str(body)? {
//!     LookupOutcome::Success(info) => {
//!         assert_eq!(info.country, "United States");
//!         assert!(info.hosting);
//!     }
//!     LookupOutcome::Failure(error) => println!("lookup failed: {}", error.message),
//! }
//! # Ok::<(), ip_lookup::DecodeError>(())
//! ```
//!
//! The crate performs no network I/O. [`lookup_url`], [`validate_query`] and
//! [`client_ip`] prepare requests for whatever transport the caller uses.

mod app;
pub mod config;
mod error_handling;
pub mod initialization;
mod lookup;
mod payload;

// Re-export public API
pub use app::{parse_payloads, read_payloads, render_text, summary_line, PayloadEntry};
pub use config::{Config, FailOn, LogFormat, LogLevel, OutputFormat};
pub use error_handling::{
    DecodeError, DecodeStats, FieldKind, InitializationError, OutcomeKind, QueryError,
    ServiceFailure,
};
pub use lookup::{
    client_ip, lookup_url, query_from_path, request_url, validate_query, LookupResponse,
};
pub use payload::{decode, decode_str, decode_value, ErrorRecord, IpInfoRecord, LookupOutcome};
pub use run::{run_decode, DecodeReport};

// Internal run module (batch decoding of an input file)
mod run {
    use std::io::Write;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::{debug, info, warn};

    use crate::app::{print_decode_statistics, read_payloads, write_outcome};
    use crate::config::Config;
    use crate::error_handling::{DecodeError, DecodeStats, OutcomeKind};
    use crate::payload::decode_value;

    /// Results of a batch decode run.
    #[derive(Debug, Clone, PartialEq)]
    pub struct DecodeReport {
        /// Total number of payloads read
        pub total: usize,
        /// Payloads decoded into a success record
        pub successful: usize,
        /// Payloads decoded into an error record
        pub service_failures: usize,
        /// Payloads rejected as malformed or not JSON
        pub rejected: usize,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    impl DecodeReport {
        fn from_stats(stats: &DecodeStats, elapsed_seconds: f64) -> Self {
            Self {
                total: stats.total(),
                successful: stats.get_count(OutcomeKind::Success),
                service_failures: stats.get_count(OutcomeKind::ServiceFailure),
                rejected: stats.total_rejected(),
                elapsed_seconds,
            }
        }
    }

    /// Decodes every payload in `config.file` and writes one line per
    /// decoded outcome to `out`.
    ///
    /// Rejected payloads are logged with their position and counted, but not
    /// written to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or `out` cannot be written.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ip_lookup::{run_decode, Config};
    /// use std::path::PathBuf;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = Config {
    ///     file: PathBuf::from("responses.jsonl"),
    ///     ..Default::default()
    /// };
    /// let report = run_decode(&config, &mut std::io::stdout())?;
    /// println!("{} of {} succeeded", report.successful, report.total);
    /// # Ok(())
    /// # }
    /// ```
    pub fn run_decode<W: Write>(config: &Config, out: &mut W) -> Result<DecodeReport> {
        let start_time = Instant::now();
        let entries = read_payloads(&config.file)?;
        info!("Decoding {} payload(s)", entries.len());

        let mut stats = DecodeStats::new();
        for entry in entries {
            let result = entry
                .payload
                .map_err(DecodeError::from)
                .and_then(|value| decode_value(&value));
            let kind = OutcomeKind::of(&result);
            stats.increment(kind);

            match result {
                Ok(outcome) => {
                    debug!("Payload {}: {}", entry.position, outcome.status());
                    write_outcome(out, &outcome, config.output_format)
                        .context("Failed to write decoded outcome")?;
                }
                Err(e) => warn!("Skipping payload {}: {}", entry.position, e),
            }
        }
        out.flush().context("Failed to flush output")?;

        print_decode_statistics(&stats);
        Ok(DecodeReport::from_stats(
            &stats,
            start_time.elapsed().as_secs_f64(),
        ))
    }
}
