//! Property-based tests for the coverage runner's argument forwarding.

use std::cell::RefCell;
use std::path::Path;

use proptest::prelude::*;

use covrun::runner::interfaces::{CoverageTool, ReportViewer, RunnerError, ToolStatus};
use covrun::runner::{COVERAGE_ARGS, RunReporter, run_coverage_with};

/// Tool fake that records every argument vector it is invoked with.
#[derive(Default)]
struct CapturingTool {
    calls: RefCell<Vec<Vec<String>>>,
}

impl CoverageTool for CapturingTool {
    fn run(&self, args: &[String]) -> Result<ToolStatus, RunnerError> {
        self.calls.borrow_mut().push(args.to_vec());
        Ok(ToolStatus {
            success: true,
            exit_code: Some(0),
        })
    }
}

struct NullViewer;

impl ReportViewer for NullViewer {
    fn open(&self, _path: &Path) -> Result<(), RunnerError> {
        Ok(())
    }
}

struct SilentReporter;

impl RunReporter for SilentReporter {
    fn on_report_ready(&mut self, _index: &Path) {}
}

proptest! {
    /// For any argument sequence, the delegated argv is exactly the fixed
    /// coverage options followed by that sequence: order preserved, nothing
    /// reordered, nothing filtered.
    #[test]
    fn delegated_argv_is_fixed_options_then_input(
        extra in proptest::collection::vec("[ -~]{0,12}", 0..8)
    ) {
        let tool = CapturingTool::default();
        let result = run_coverage_with(&extra, &tool, &NullViewer, &mut SilentReporter);
        prop_assert!(result.is_ok());

        let calls = tool.calls.borrow();
        prop_assert_eq!(calls.len(), 1);

        let argv = &calls[0];
        prop_assert_eq!(argv.len(), COVERAGE_ARGS.len() + extra.len());
        prop_assert_eq!(&argv[..COVERAGE_ARGS.len()], COVERAGE_ARGS);
        prop_assert_eq!(&argv[COVERAGE_ARGS.len()..], extra.as_slice());
    }
}
