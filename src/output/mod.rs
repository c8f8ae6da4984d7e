//! Output of findings.
//!
//! - [`terminal`] - Findings as error log lines with a coloured summary
//! - [`json`] - Findings as a JSON array

mod json;
mod terminal;

pub use json::{findings_to_json, print_json};
pub use terminal::{log_findings, summary_line};
