//! Coverage run orchestration
//!
//! The pipeline has exactly two stages: run the delegated coverage tool, and
//! on success only, announce the HTML report and best-effort open it. The
//! delegated tool's exit status is the runner's own exit status; nothing
//! downstream may change it.
//!
//! ## RunReporter Trait
//!
//! User-facing output goes through a `RunReporter` so tests can observe the
//! exact emission order without capturing stdout. `ConsoleReporter` is the
//! default implementation.

pub mod interfaces;

use std::path::Path;

use crate::cli::{CliError, CliResult, ExitCode};
use interfaces::{CoverageTool, DefaultCoverageTool, DefaultReportViewer, ReportViewer};

/// Fixed options handed to the delegated tool before any caller argument:
/// run the test suite instrumented for coverage, print a terminal summary
/// with missing line ranges, and write an HTML report under `coverage/`.
pub const COVERAGE_ARGS: &[&str] = &[
    "llvm-cov",
    "test",
    "--show-missing-lines",
    "--html",
    "--output-dir",
    "coverage",
];

/// Entry page of the generated HTML report.
pub const REPORT_INDEX: &str = "coverage/html/index.html";

// ============================================================================
// Run Reporter Trait
// ============================================================================

/// Trait for the runner's informational output.
pub trait RunReporter {
    /// Called once before the delegated tool starts.
    fn on_run_start(&mut self) {}

    /// Called once, only after the delegated tool exited successfully and
    /// before the viewer launch is attempted.
    fn on_report_ready(&mut self, index: &Path);
}

/// Default console reporter.
#[derive(Default)]
pub struct ConsoleReporter;

impl RunReporter for ConsoleReporter {
    fn on_run_start(&mut self) {
        println!("Running tests with coverage...");
    }

    fn on_report_ready(&mut self, index: &Path) {
        println!("HTML coverage report written to {}", index.display());
    }
}

// ============================================================================
// Orchestration
// ============================================================================

/// Run the coverage-instrumented test suite with the real collaborators.
pub fn run_coverage(extra_args: &[String]) -> CliResult<ExitCode> {
    run_coverage_with(
        extra_args,
        &DefaultCoverageTool::from_env(),
        &DefaultReportViewer::from_env(),
        &mut ConsoleReporter,
    )
}

/// Run the coverage pipeline against injected collaborators.
///
/// `extra_args` is appended verbatim after [`COVERAGE_ARGS`], in order, with
/// no reordering or filtering. A non-zero delegated exit status terminates
/// the pipeline immediately with that same status; the report announcement
/// and viewer launch happen on success only, and the viewer launch can never
/// alter the result.
pub fn run_coverage_with(
    extra_args: &[String],
    tool: &dyn CoverageTool,
    viewer: &dyn ReportViewer,
    reporter: &mut dyn RunReporter,
) -> CliResult<ExitCode> {
    reporter.on_run_start();

    let mut args: Vec<String> = COVERAGE_ARGS.iter().map(|s| s.to_string()).collect();
    args.extend(extra_args.iter().cloned());

    let status = tool
        .run(&args)
        .map_err(|e| CliError::failure(format!("Error running coverage tool: {}", e)))?;

    if !status.success {
        // The delegated tool already printed its own output; exit with its
        // status and nothing more. Signal death carries no code, map it to 1.
        return Err(CliError::new("", ExitCode(status.exit_code.unwrap_or(1))));
    }

    reporter.on_report_ready(Path::new(REPORT_INDEX));

    if let Err(e) = viewer.open(Path::new(REPORT_INDEX)) {
        tracing::debug!("viewer launch discarded: {}", e);
    }

    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// Tests
// ============================================================================
