//! Command line settings and checker configuration.

use crate::models::MaskPolicy;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Options that change what the checker reports.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CheckConfig {
    pub mask_policy: MaskPolicy,
}

/// How findings are written.
#[derive(ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One error log line per finding on stderr
    #[default]
    Text,
    /// JSON array of findings on stdout
    Json,
}

/// Check file for invalid and overlapping route subnets
#[derive(Parser, Debug, Clone)]
#[command(name = "check-routes")]
#[command(version)]
pub struct Settings {
    /// File containing list of subnets
    #[arg(short, long, env = "CHECK_ROUTES_FILE")]
    pub file: PathBuf,

    /// Enable debug output
    #[arg(short, long)]
    pub debug: bool,

    /// Quiet mode, do not print anything to stdout
    #[arg(short, long)]
    pub quiet: bool,

    /// Clear host bits instead of rejecting subnets like 10.0.10.0/16
    #[arg(long)]
    pub auto_mask: bool,

    /// Output format for findings
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// log4rs YAML file to configure logging, overrides --debug and --quiet
    #[arg(long)]
    pub log_config: Option<PathBuf>,
}

impl Settings {
    pub fn check_config(&self) -> CheckConfig {
        CheckConfig {
            mask_policy: if self.auto_mask {
                MaskPolicy::AutoMask
            } else {
                MaskPolicy::Strict
            },
        }
    }
}
