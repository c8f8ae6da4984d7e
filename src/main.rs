use check_routes::check_file;
use check_routes::config::{OutputFormat, Settings};
use check_routes::logging::init_logging;
use check_routes::output::{log_findings, print_json, summary_line};
use clap::Parser;
use std::error::Error;
use std::process::ExitCode;

/// Exit code when the route file or logging setup fails.
const EXIT_FATAL: u8 = 2;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let settings = Settings::parse();

    if let Err(e) = init_logging(&settings) {
        eprintln!("Error initializing logging: {e}");
        return ExitCode::from(EXIT_FATAL);
    }
    log::debug!("#Start main() {settings:?}");

    match run(&settings) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            log::error!("{e}");
            ExitCode::from(EXIT_FATAL)
        }
    }
}

/// Check the route file and report findings, returns true if there were none.
fn run(settings: &Settings) -> Result<bool, Box<dyn Error>> {
    let findings = check_file(&settings.file, &settings.check_config())?;

    match settings.format {
        OutputFormat::Text => {
            log_findings(&findings);
            log::info!("{}", summary_line(&settings.file, &findings));
        }
        OutputFormat::Json => {
            if !settings.quiet {
                print_json(&findings)?;
            }
        }
    }

    Ok(findings.is_empty())
}
