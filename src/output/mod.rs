//! Ranked result output and console summary formatting

use crate::error::{AppError, Result};
use crate::models::{BatchReport, ProbeOutcome};
use colored::Colorize;
use std::cmp::Ordering;
use std::fs;
use std::path::Path;

/// Render the answering addresses as ranked output lines.
///
/// Replies are sorted ascending by latency (stable, so ties keep their
/// relative order) and formatted as `<address>  <integer>ms` with the
/// fractional latency truncated toward zero. No-reply outcomes are dropped.
pub fn ranked_lines(outcomes: &[ProbeOutcome]) -> Vec<String> {
    let mut replies: Vec<(&str, f64)> = outcomes
        .iter()
        .filter_map(|o| o.latency_ms().map(|ms| (o.address(), ms)))
        .collect();

    replies.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));

    replies
        .into_iter()
        .map(|(address, latency_ms)| format!("{}  {}ms", address, latency_ms as i64))
        .collect()
}

/// Write the ranked results to `path`, overwriting any existing file.
///
/// An empty batch still creates the file, empty. An unwritable path is
/// fatal to the run.
pub fn write_ranked(outcomes: &[ProbeOutcome], path: &Path) -> Result<()> {
    let mut contents = ranked_lines(outcomes).join("\n");
    if !contents.is_empty() {
        contents.push('\n');
    }

    fs::write(path, contents)
        .map_err(|e| AppError::io(format!("Failed to write results to {}: {}", path.display(), e)))
}

/// Format the end-of-run console summary.
pub fn format_summary(report: &BatchReport, use_color: bool) -> String {
    let replies = report.reply_count();
    let no_replies = report.no_reply_count();

    if use_color {
        format!(
            "Probe results: {} replied, {} unreachable",
            replies.to_string().green().bold(),
            no_replies.to_string().red().bold()
        )
    } else {
        format!("Probe results: {} replied, {} unreachable", replies, no_replies)
    }
}
