//! Subnet validation and the table of declared networks.

use crate::models::{parse_subnet, Finding, Ipv4, MaskPolicy};
use std::collections::HashMap;

/// Declared networks, keyed by canonical subnet, with the line they were declared on.
///
/// A subnet declared twice keeps the later line number.
#[derive(Debug, Default, Clone)]
pub struct NetworkTable {
    networks: HashMap<Ipv4, usize>,
}

impl NetworkTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `subnet` declared on `line_nr`.
    ///
    /// Returns the previous line number if the subnet was already declared.
    pub fn insert(&mut self, subnet: Ipv4, line_nr: usize) -> Option<usize> {
        let previous = self.networks.insert(subnet, line_nr);
        if let Some(prev_line_nr) = previous {
            log::warn!(
                "Duplicate subnet {subnet} on line number {line_nr}, already declared on line number {prev_line_nr}"
            );
        }
        previous
    }

    pub fn line_nr(&self, subnet: &Ipv4) -> Option<usize> {
        self.networks.get(subnet).copied()
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    /// Subnets in unspecified order.
    pub fn subnets(&self) -> impl Iterator<Item = &Ipv4> {
        self.networks.keys()
    }
}

/// Validate the subnet expression of a route declared on `line_nr`.
///
/// On success the canonical subnet is returned, otherwise an
/// [`Finding::Invalid`] carrying the literal as written.
pub fn validate_subnet(expr: &str, line_nr: usize, policy: MaskPolicy) -> Result<Ipv4, Finding> {
    parse_subnet(expr, policy).map_err(|e| {
        log::debug!("Invalid subnet {expr:?} on line number {line_nr}: {e}");
        Finding::Invalid {
            literal: expr.to_string(),
            line_nr,
            reason: e.to_string(),
        }
    })
}
