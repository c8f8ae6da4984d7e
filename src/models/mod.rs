//! Domain models for the route checker.
//!
//! - [`Ipv4`] - IPv4 network with CIDR notation support
//! - [`Finding`] - A problem found in a route file

mod finding;
mod ipv4;

// Re-export public types
pub use finding::{Finding, FindingKind};
pub use ipv4::{
    cut_addr, get_cidr_mask, parse_subnet, prefix_from_netmask, Ipv4, MaskPolicy, MAX_LENGTH,
};
