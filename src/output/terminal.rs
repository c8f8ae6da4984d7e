//! Terminal output utilities.

use crate::models::{Finding, FindingKind};
use colored::Colorize;
use std::path::Path;

/// Log every finding as one error line.
pub fn log_findings(findings: &[Finding]) {
    for finding in findings {
        log::error!("{finding}");
    }
}

/// One line summary, e.g. `FAILED routes.txt: 2 findings (1 invalid, 1 overlap, 0 format)`.
pub fn summary_line(path: &Path, findings: &[Finding]) -> String {
    if findings.is_empty() {
        return format!("{} {}", "OK".green(), path.display());
    }
    let count = |kind: FindingKind| findings.iter().filter(|f| f.kind() == kind).count();
    format!(
        "{} {}: {} finding{} ({} invalid, {} overlap, {} format)",
        "FAILED".on_red(),
        path.display(),
        findings.len(),
        if findings.len() == 1 { "" } else { "s" },
        count(FindingKind::Invalid),
        count(FindingKind::Overlap),
        count(FindingKind::Format),
    )
}
