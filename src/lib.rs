//! Check route files for invalid and overlapping subnets.
//!
//! A route file holds one `push route <subnet>` declaration per line, with
//! `#` comments and blank lines allowed. [`check_file`] reports every subnet
//! that is not a valid IPv4 CIDR network, every other unrecognised line, and
//! overlapping neighbours among the valid subnets.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use config::CheckConfig;
use error::CheckError;
use models::Finding;
use processing::{
    classify_line, find_overlaps, route_lines, validate_subnet, LineClass, NetworkTable,
};
use std::path::Path;

/// Check the route file at `path`.
///
/// Only an unreadable file is an error, problems inside the file are returned
/// as findings.
pub fn check_file<P: AsRef<Path>>(
    path: P,
    config: &CheckConfig,
) -> Result<Vec<Finding>, CheckError> {
    let path = path.as_ref();
    log::debug!("Reading route file {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|source| CheckError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(check_str(&content, config))
}

/// Check route file content.
///
/// Invalid and format findings come first in line order, followed by overlap
/// findings in sorted subnet order.
pub fn check_str(content: &str, config: &CheckConfig) -> Vec<Finding> {
    let mut findings = Vec::new();
    let mut networks = NetworkTable::new();

    for line in route_lines(content) {
        match classify_line(&line) {
            LineClass::Route(expr) => {
                match validate_subnet(expr, line.line_nr, config.mask_policy) {
                    Ok(subnet) => {
                        networks.insert(subnet, line.line_nr);
                    }
                    Err(finding) => findings.push(finding),
                }
            }
            LineClass::Ignored => {}
            LineClass::Malformed(finding) => findings.push(finding),
        }
    }
    log::debug!("Found {} unique subnets", networks.len());

    findings.extend(find_overlaps(&networks));
    findings
}
