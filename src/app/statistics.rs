//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{DecodeStats, OutcomeKind};

/// Logs the per-kind outcome counts of a run.
pub fn print_decode_statistics(stats: &DecodeStats) {
    for line in statistics_lines(stats) {
        info!("{line}");
    }
}

fn statistics_lines(stats: &DecodeStats) -> Vec<String> {
    let total = stats.total();
    if total == 0 {
        return vec!["No payloads decoded".to_string()];
    }

    let mut lines = vec![format!("Outcome Counts ({} total):", total)];
    lines.extend(OutcomeKind::iter().filter_map(|kind| {
        let count = stats.get_count(kind);
        (count > 0).then(|| format!("   {}: {}", kind.as_str(), count))
    }));
    lines
}

/// Formats the one-line summary printed at the end of a run.
pub fn summary_line(report: &crate::DecodeReport) -> String {
    format!(
        "Decoded {} payload{} ({} succeeded, {} service failures, {} rejected) in {:.3}s",
        report.total,
        if report.total == 1 { "" } else { "s" },
        report.successful,
        report.service_failures,
        report.rejected,
        report.elapsed_seconds
    )
}
