//! Route file processing.
//!
//! - [`classify`] - Sorting lines into routes, comments and malformed lines
//! - [`validate`] - Parsing route subnets into the [`NetworkTable`]
//! - [`overlap`] - Finding overlapping subnets

mod classify;
mod overlap;
mod validate;

// Re-export public functions
pub use classify::{classify_line, route_lines, LineClass, RouteLine};
pub use overlap::find_overlaps;
pub use validate::{validate_subnet, NetworkTable};
