//! Configuration for the zephyr-sync command line
//!
//! This module provides the command-line options: where the reports live,
//! how the results are rendered and how much is logged.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Zephyr Sync - turn JUnit XML reports into test results for Zephyr
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "zephyr-sync")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Path to a JUnit report file or a directory of reports
    ///
    /// A directory is searched recursively for readable files named
    /// TEST*.xml. A file is parsed as-is, whatever its name.
    #[arg(env = "ZEPHYR_REPORT_PATH")]
    pub report_path: PathBuf,

    /// Output format for the transformed test cases
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Enable verbose logging (debug level)
    ///
    /// Logs every report file found and parsed. Logs are written to stderr
    /// so they never mix with the results on stdout.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

/// How transformed test cases are written to stdout
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON array of test cases
    #[default]
    Json,
    /// One line per test case followed by totals
    Summary,
}

impl Config {
    /// Validate the configuration
    ///
    /// Existence of the report path is not checked here; the transformer
    /// reports a missing path itself.
    ///
    /// # Errors
    ///
    /// Returns an error if the report path is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.report_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyReportPath);
        }
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Report path given as an empty string
    #[error("Report path must not be empty")]
    EmptyReportPath,
}
