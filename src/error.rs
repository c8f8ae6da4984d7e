//! Error types for the route checker.
//!
//! Problems inside the route file are not errors, they are reported as
//! [`Finding`](crate::models::Finding)s. The only fatal error is a file that
//! can not be read.

use std::io;
use std::path::PathBuf;

/// Fatal error while checking a route file.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// The route file could not be opened or read.
    #[error("Error reading route file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reason a subnet literal was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubnetError {
    #[error("empty subnet")]
    Empty,

    #[error("missing /prefix")]
    MissingPrefix,

    #[error("invalid address '{0}'")]
    InvalidAddress(String),

    #[error("invalid prefix length '{0}'")]
    InvalidPrefix(String),

    #[error("prefix length {0} is too long, max is 32")]
    PrefixTooLong(u32),

    #[error("netmask {0} is not contiguous")]
    InvalidNetmask(String),

    #[error("host bits set, network is {0}")]
    HostBitsSet(String),
}
