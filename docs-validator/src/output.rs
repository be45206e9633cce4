//! Output formatting for run reports.
//!
//! Success goes to the `out` writer, failures and crashes to `err`, so the
//! binary can pass stdout and stderr respectively.

use std::io::Write;

use crate::report::RunReport;

/// Header printed before the error list.
pub const FAILED_HEADER: &str = "Docs validation failed:";
/// Header printed when the run could not complete.
pub const CRASHED_HEADER: &str = "Docs validation crashed:";

/// Format a `RunReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &RunReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `RunReport` as plain text.
///
/// A passing report is a one-line summary on `out`. A failing report is a
/// header followed by one `- path[:line]: message` line per error on `err`.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(
    report: &RunReport,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> anyhow::Result<()> {
    if report.ok() {
        writeln!(
            out,
            "Docs validation passed: {} files, {} code blocks.",
            report.files_scanned, report.code_blocks
        )?;
        return Ok(());
    }

    writeln!(err, "{FAILED_HEADER}")?;
    for error in &report.errors {
        writeln!(err, "- {}", error.format_human_readable())?;
    }
    Ok(())
}

/// Report a run that could not complete, including the full cause chain.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_crash(error: &anyhow::Error, err: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(err, "{CRASHED_HEADER} {error:#}")?;
    Ok(())
}
