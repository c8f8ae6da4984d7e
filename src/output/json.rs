//! JSON output of findings.

use crate::models::{Finding, FindingKind};
use serde::Serialize;
use std::error::Error;

#[derive(Serialize, Debug)]
struct FindingRow {
    kind: FindingKind,
    line_nr: usize,
    subnets: Vec<String>,
    message: String,
}

impl From<&Finding> for FindingRow {
    fn from(finding: &Finding) -> Self {
        FindingRow {
            kind: finding.kind(),
            line_nr: finding.line_nr(),
            subnets: finding.subnets(),
            message: finding.message(),
        }
    }
}

/// Serialize findings as a pretty printed JSON array.
pub fn findings_to_json(findings: &[Finding]) -> Result<String, Box<dyn Error>> {
    let rows: Vec<FindingRow> = findings.iter().map(FindingRow::from).collect();
    serde_json::to_string_pretty(&rows).map_err(|e| format!("Error serializing JSON: {e}").into())
}

/// Print findings as JSON to stdout.
pub fn print_json(findings: &[Finding]) -> Result<(), Box<dyn Error>> {
    println!("{}", findings_to_json(findings)?);
    Ok(())
}
