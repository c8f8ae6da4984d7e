//! Logger setup.
//!
//! Debug, info and warning lines go to stdout, errors go to stderr.

use crate::config::Settings;
use log::{Level, LevelFilter, Record};
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::filter::threshold::ThresholdFilter;
use log4rs::filter::{Filter, Response};
use std::error::Error;

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} [{P}] {l}: {m}{n}";

/// Rejects records at error level, those are written by the stderr appender.
#[derive(Debug)]
struct BelowErrorFilter;

impl Filter for BelowErrorFilter {
    fn filter(&self, record: &Record) -> Response {
        if record.level() == Level::Error {
            Response::Reject
        } else {
            Response::Neutral
        }
    }
}

/// Build the log4rs config for `settings`.
pub fn log_config(settings: &Settings) -> Result<Config, Box<dyn Error>> {
    let level = if settings.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();
    let mut config = Config::builder().appender(
        Appender::builder()
            .filter(Box::new(ThresholdFilter::new(LevelFilter::Error)))
            .build("stderr", Box::new(stderr)),
    );
    let mut root = Root::builder().appender("stderr");

    if !settings.quiet {
        let stdout = ConsoleAppender::builder()
            .target(Target::Stdout)
            .encoder(Box::new(PatternEncoder::new(PATTERN)))
            .build();
        config = config.appender(
            Appender::builder()
                .filter(Box::new(BelowErrorFilter))
                .build("stdout", Box::new(stdout)),
        );
        root = root.appender("stdout");
    }

    Ok(config.build(root.build(level))?)
}

/// Install the global logger, from `--log-config` if given.
pub fn init_logging(settings: &Settings) -> Result<(), Box<dyn Error>> {
    if let Some(path) = &settings.log_config {
        log4rs::init_file(path, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {}: {e}", path.display()))?;
        return Ok(());
    }
    log4rs::init_config(log_config(settings)?)?;
    Ok(())
}
