//! CLI module for covrun
//!
//! This module provides the command-line interface for the coverage runner.
//!
//! ## Surface
//!
//! `covrun [ARGS]...` — every caller argument is forwarded verbatim to the
//! delegated coverage tool, in order, with no interpretation or validation.
//! There are no subcommands and no flags of covrun's own beyond the standard
//! `--help`/`--version` handled by clap.
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::fmt;
use std::process;

use clap::Parser;

use crate::runner;
use crate::version::COVRUN_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Run the test suite with coverage and open the HTML report
#[derive(Parser, Debug)]
#[command(name = "covrun")]
#[command(version = COVRUN_VERSION)]
#[command(about = "Run the test suite with coverage and open the HTML report", long_about = None)]
pub struct Cli {
    /// Arguments forwarded verbatim to the delegated coverage tool
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. The runner
/// returns `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the coverage run and return its result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    runner::run_coverage(&cli.args)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::try_parse_from(["covrun"]).unwrap();
        assert!(cli.args.is_empty());
    }

    #[test]
    fn test_cli_parse_forwards_positional_args() {
        let cli = Cli::try_parse_from(["covrun", "quadratic", "dates"]).unwrap();
        assert_eq!(cli.args, vec!["quadratic", "dates"]);
    }

    #[test]
    fn test_cli_parse_forwards_hyphen_args() {
        let cli = Cli::try_parse_from(["covrun", "-k", "test_foo"]).unwrap();
        assert_eq!(cli.args, vec!["-k", "test_foo"]);
    }

    #[test]
    fn test_cli_parse_preserves_order() {
        let cli = Cli::try_parse_from(["covrun", "--workspace", "-k", "test_foo", "--nocapture"]).unwrap();
        assert_eq!(cli.args, vec!["--workspace", "-k", "test_foo", "--nocapture"]);
    }
}
