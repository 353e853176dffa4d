//! zephyr-sync: turn JUnit XML reports into sync-ready test results
//!
//! This binary crate reads JUnit reports from a file or directory and writes
//! the normalized test cases to stdout. Logs go to stderr.

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use zephyr_sync::config::Config;
use zephyr_sync::report;

fn main() -> ExitCode {
    let config = Config::parse();

    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    debug!(?config, "Starting zephyr-sync");

    if let Err(e) = config.validate() {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    match report::run(&config, &mut std::io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
