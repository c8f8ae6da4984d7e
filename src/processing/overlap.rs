//! Overlapping subnet detection.
//!
//! Subnets are sorted by address then mask length and only neighbours in that
//! order are compared. If `a` overlaps `c` but the subnet `b` sorted between
//! them does not overlap `c`, the `a`/`c` overlap is not reported.

use super::NetworkTable;
use crate::models::{Finding, Ipv4};
use itertools::Itertools;

/// Find overlapping neighbours in the sorted subnets of `table`.
pub fn find_overlaps(table: &NetworkTable) -> Vec<Finding> {
    let sorted: Vec<&Ipv4> = table.subnets().sorted().collect();
    let mut findings = Vec::new();

    for (prev, current) in sorted.iter().tuple_windows() {
        log::debug!("Comparing {prev} <-> {current}");
        if prev.overlaps(current) {
            findings.push(Finding::Overlap {
                a: prev.to_string(),
                a_line_nr: table.line_nr(prev).unwrap_or_default(),
                b: current.to_string(),
                b_line_nr: table.line_nr(current).unwrap_or_default(),
            });
        } else {
            log::debug!("OK: {current}");
        }
    }
    if let Some(last) = sorted.last() {
        log::debug!("OK: {last}");
    }

    findings
}
