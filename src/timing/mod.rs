//! Repeated-run timing harness
//!
//! Runs the delegated test tool several times with captured output and
//! reports wall-clock statistics (mean and sample standard deviation).
//! Failed runs have their captured output replayed so the failure is not
//! hidden by the capture.

use std::env;
use std::process::Command;
use std::time::{Duration, Instant};

use crate::cli::{CliError, CliResult, ExitCode};
use crate::runner::interfaces::TOOL_ENV;

/// Statistics for a completed timing session.
#[derive(Debug)]
pub struct TimingStats {
    pub total_runs: u32,
    pub failures: u32,
    pub mean: Duration,
    pub std_dev: Duration,
}

/// Run the test suite `runs` times and print timing statistics.
///
/// Exit status is 0 only when every run passed.
pub fn run_timing(test_args: &[String], runs: u32) -> CliResult<ExitCode> {
    if runs == 0 {
        return Err(CliError::failure("Error: --runs must be at least 1"));
    }

    let program = env::var(TOOL_ENV).unwrap_or_else(|_| "cargo".to_string());

    println!("Timing {} run(s) of the test suite...", runs);

    let mut durations: Vec<Duration> = Vec::with_capacity(runs as usize);
    let mut failures = 0u32;

    for run_index in 1..=runs {
        let start = Instant::now();
        let output = Command::new(&program)
            .arg("test")
            .args(test_args)
            .output()
            .map_err(|e| CliError::failure(format!("Error running {}: {}", program, e)))?;
        let elapsed = start.elapsed();
        durations.push(elapsed);

        if !output.status.success() {
            failures += 1;
            eprintln!(
                "Run {}/{} failed with exit code {}",
                run_index,
                runs,
                output.status.code().unwrap_or(1)
            );
            eprintln!("--- Stdout ---");
            eprint!("{}", String::from_utf8_lossy(&output.stdout));
            eprintln!("--- Stderr ---");
            eprint!("{}", String::from_utf8_lossy(&output.stderr));
        }
    }

    let stats = TimingStats {
        total_runs: runs,
        failures,
        mean: mean(&durations),
        std_dev: std_dev(&durations),
    };

    println!(
        "{} run(s): mean {:.3}s, std dev {:.3}s, {} failure(s)",
        stats.total_runs,
        stats.mean.as_secs_f64(),
        stats.std_dev.as_secs_f64(),
        stats.failures
    );

    if stats.failures > 0 {
        Err(CliError::new("", ExitCode::FAILURE))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Arithmetic mean of the sample.
fn mean(samples: &[Duration]) -> Duration {
    if samples.is_empty() {
        return Duration::ZERO;
    }
    let total: Duration = samples.iter().sum();
    total / samples.len() as u32
}

/// Sample standard deviation; zero for fewer than two samples.
fn std_dev(samples: &[Duration]) -> Duration {
    if samples.len() < 2 {
        return Duration::ZERO;
    }

    let mean_secs = mean(samples).as_secs_f64();
    let variance = samples
        .iter()
        .map(|d| {
            let diff = d.as_secs_f64() - mean_secs;
            diff * diff
        })
        .sum::<f64>()
        / (samples.len() - 1) as f64;

    Duration::from_secs_f64(variance.sqrt())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_of_empty_sample_is_zero() {
        assert_eq!(mean(&[]), Duration::ZERO);
    }

    #[test]
    fn test_mean_of_uniform_sample() {
        let samples = [Duration::from_secs(2); 4];
        assert_eq!(mean(&samples), Duration::from_secs(2));
    }

    #[test]
    fn test_std_dev_of_single_sample_is_zero() {
        assert_eq!(std_dev(&[Duration::from_secs(3)]), Duration::ZERO);
    }

    #[test]
    fn test_std_dev_matches_sample_formula() {
        // Samples 1s, 3s: mean 2s, sample variance 2, std dev sqrt(2)
        let samples = [Duration::from_secs(1), Duration::from_secs(3)];
        let expected = Duration::from_secs_f64(2f64.sqrt());
        let got = std_dev(&samples);
        let delta = got.as_secs_f64() - expected.as_secs_f64();
        assert!(delta.abs() < 1e-9);
    }
}
