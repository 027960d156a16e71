//! covrun-timing entry point
//!
//! Companion binary to `covrun`: runs the test suite repeatedly (no
//! coverage) and reports wall-clock timing statistics.

use std::process;

use clap::Parser;

use covrun::timing;
use covrun::version::COVRUN_VERSION;

/// Measure repeated test-run wall-clock timing
#[derive(Parser, Debug)]
#[command(name = "covrun-timing")]
#[command(version = COVRUN_VERSION)]
#[command(about = "Measure repeated test-run wall-clock timing", long_about = None)]
struct Cli {
    /// Number of timed runs
    #[arg(short = 'n', long = "runs", default_value_t = 10)]
    runs: u32,

    /// Arguments forwarded verbatim to the delegated test tool
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() {
    // Initialize structured logging with env-based filter, defaulting to info
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    let cli = Cli::parse();

    match timing::run_timing(&cli.args, cli.runs) {
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
