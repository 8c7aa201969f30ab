//! Console output.
//!
//! # Output Format
//!
//! ## Generate
//!
//! One line, always:
//!
//! ```text
//! Manifest written to file-list.json with 3 entries.
//! ```
//!
//! ## Check
//!
//! Display name first, source filename as an indented context line:
//!
//! ```text
//! data/ (*.csv, 2 entries)
//! 001 Sales_Report
//!     Source: sales_report.csv
//! 002 Q1-Data
//!     Source: Q1-Data.CSV
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (pure, returns the lines) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::generate::GenerateReport;
use crate::types::ManifestEntry;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

// ============================================================================
// Generate
// ============================================================================

pub fn format_generate_output(report: &GenerateReport) -> String {
    format!(
        "Manifest written to {} with {} entries.",
        report.output.display(),
        report.entries.len()
    )
}

pub fn print_generate_output(report: &GenerateReport) {
    println!("{}", format_generate_output(report));
}

// ============================================================================
// Check
// ============================================================================

/// Format the entry listing shown by `check`.
pub fn format_check_output(
    entries: &[ManifestEntry],
    source_dir: &Path,
    extension: &str,
) -> Vec<String> {
    let mut lines = vec![format!(
        "{}/ (*{}, {} {})",
        source_dir.display(),
        extension,
        entries.len(),
        if entries.len() == 1 { "entry" } else { "entries" }
    )];
    for (i, entry) in entries.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), entry.display_name));
        lines.push(format!("{}Source: {}", indent(1), entry.filename));
    }
    lines
}

pub fn print_check_output(entries: &[ManifestEntry], source_dir: &Path, extension: &str) {
    for line in format_check_output(entries, source_dir, extension) {
        println!("{}", line);
    }
}
