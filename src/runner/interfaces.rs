//! Runner I/O boundary interfaces
//!
//! This module defines trait-based abstractions for the two external
//! collaborators of the coverage runner:
//! - The delegated coverage tool (cargo llvm-cov invocation)
//! - The report viewer (host default-viewer launch)
//!
//! These interfaces allow tests to substitute recording or failing fakes
//! without spawning real subprocesses. Default implementations preserve the
//! real behavior.

use std::env;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use thiserror::Error;

/// Environment variable overriding the delegated tool's program name.
pub const TOOL_ENV: &str = "COVRUN_TOOL";

/// Environment variable pinning the viewer program used to open the report.
pub const VIEWER_ENV: &str = "COVRUN_VIEWER";

/// Errors that occur at the runner's I/O boundaries
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("failed to run {program}: {source}")]
    ToolLaunch {
        program: String,
        source: std::io::Error,
    },

    #[error("could not open {path}: {source}")]
    ViewerLaunch {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Outcome of a delegated tool run.
///
/// `exit_code` is `None` when the process was terminated by a signal.
#[derive(Debug, Clone, Copy)]
pub struct ToolStatus {
    pub success: bool,
    pub exit_code: Option<i32>,
}

// ============================================================================
// Coverage Tool Interface
// ============================================================================

/// Execute the delegated coverage tool and report its exit status.
///
/// `args` is the fully assembled argument vector: the fixed coverage options
/// followed by the caller's arguments, in order. Implementations must not
/// reorder or filter it.
pub trait CoverageTool {
    fn run(&self, args: &[String]) -> Result<ToolStatus, RunnerError>;
}

// ============================================================================
// Report Viewer Interface
// ============================================================================

/// Open the HTML report with the host's default viewer.
///
/// Callers treat failures as best-effort; implementations only need to
/// report them.
pub trait ReportViewer {
    fn open(&self, path: &Path) -> Result<(), RunnerError>;
}

// ============================================================================
// Default Implementations (Real Behavior)
// ============================================================================

/// Subprocess-based tool invocation with inherited stdio.
///
/// The delegated tool's terminal coverage summary streams straight through
/// to the user; nothing is captured.
pub struct DefaultCoverageTool {
    program: String,
}

impl DefaultCoverageTool {
    /// Build the default tool, honoring the `COVRUN_TOOL` override.
    pub fn from_env() -> Self {
        Self {
            program: env::var(TOOL_ENV).unwrap_or_else(|_| "cargo".to_string()),
        }
    }
}

impl CoverageTool for DefaultCoverageTool {
    fn run(&self, args: &[String]) -> Result<ToolStatus, RunnerError> {
        let mut child = Command::new(&self.program)
            .args(args)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| RunnerError::ToolLaunch {
                program: self.program.clone(),
                source: e,
            })?;

        let status = child.wait().map_err(|e| RunnerError::ToolLaunch {
            program: self.program.clone(),
            source: e,
        })?;

        Ok(ToolStatus {
            success: status.success(),
            exit_code: status.code(),
        })
    }
}

/// Default-viewer launch via the `open` crate.
pub struct DefaultReportViewer {
    program: Option<String>,
}

impl DefaultReportViewer {
    /// Build the default viewer, honoring the `COVRUN_VIEWER` override.
    pub fn from_env() -> Self {
        Self {
            program: env::var(VIEWER_ENV).ok(),
        }
    }
}

impl ReportViewer for DefaultReportViewer {
    fn open(&self, path: &Path) -> Result<(), RunnerError> {
        let result = match &self.program {
            Some(program) => open::with(path, program.as_str()),
            None => open::that(path),
        };

        result.map_err(|e| RunnerError::ViewerLaunch {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_launch_error_names_program() {
        let tool = DefaultCoverageTool {
            program: "covrun-no-such-program".to_string(),
        };
        let err = tool.run(&["llvm-cov".to_string()]).unwrap_err();
        assert!(err.to_string().contains("covrun-no-such-program"));
    }

    #[test]
    fn test_viewer_launch_error_names_path() {
        let viewer = DefaultReportViewer {
            program: Some("covrun-no-such-viewer".to_string()),
        };
        let err = viewer.open(Path::new("coverage/html/index.html")).unwrap_err();
        assert!(err.to_string().contains("coverage/html/index.html"));
    }
}
