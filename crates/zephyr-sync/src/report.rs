//! Report transformation and output rendering
//!
//! Runs the JUnit transformer over the configured report path and writes the
//! resulting test cases in the requested format.

use std::io::Write;

use anyhow::Context;
use tracing::{info, warn};
use zephyr_junit::{JUnitTransformer, ReportTransformer, Summary, TestCase, duplicate_unique_ids};

use crate::config::{Config, OutputFormat};

/// Transform the configured report path and write the results to `out`
///
/// Failing tests are not an error; the returned summary tells the caller
/// how many there were.
///
/// # Errors
///
/// Returns an error if the reports cannot be located or parsed, or if
/// writing the output fails.
pub fn run<W: Write>(config: &Config, out: &mut W) -> anyhow::Result<Summary> {
    let transformer = JUnitTransformer::new();
    let cases = transformer
        .transform_to_test_cases(&config.report_path)
        .with_context(|| {
            format!(
                "Failed to transform {} report at {}",
                transformer.report_type(),
                config.report_path.display()
            )
        })?;

    for id in duplicate_unique_ids(&cases) {
        warn!(unique_id = id, "Duplicate unique id in reports");
    }

    render(&cases, config.format, out)?;

    let summary = Summary::from_cases(&cases);
    info!(
        total = summary.total,
        passed = summary.passed,
        failed = summary.failed,
        "Report transformation complete"
    );
    Ok(summary)
}

/// Write `cases` to `out` in the given format
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn render<W: Write>(
    cases: &[TestCase],
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, cases)
                .context("Failed to write JSON output")?;
            writeln!(out)?;
        }
        OutputFormat::Summary => {
            for case in cases {
                writeln!(out, "{:<6}  {}", case.status, case.unique_id)?;
            }
            let summary = Summary::from_cases(cases);
            writeln!(
                out,
                "{} tests, {} passed, {} failed",
                summary.total, summary.passed, summary.failed
            )?;
        }
    }
    out.flush()?;
    Ok(())
}
