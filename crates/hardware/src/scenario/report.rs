//! Scenario reports.
//!
//! A report is the single place a scenario's result turns into output. The printed message
//! and the process exit code are both derived from the same `Verdict`, so a run that
//! reports a failure always exits nonzero.

use std::fmt;

use serde::Serialize;

use crate::common::error::HarnessError;
use crate::device::ClockConvention;
use crate::stats::DriverStats;

/// Exit code of a passing run.
pub const EXIT_PASS: u8 = 0;
/// Exit code of a failing run.
pub const EXIT_FAIL: u8 = 1;

/// Result of one scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Verdict {
    /// Every comparison matched.
    Passed,
    /// A comparison did not match.
    Failed {
        /// Value computed by the reference.
        expected: i64,
        /// Value read from the device.
        actual: i64,
        /// Argument of the failing trial, if any.
        arg: Option<i64>,
    },
    /// The device could not be driven to a comparison.
    Error {
        /// Rendered error.
        message: String,
    },
}

impl From<HarnessError> for Verdict {
    fn from(err: HarnessError) -> Self {
        match err {
            HarnessError::Mismatch {
                expected,
                actual,
                arg,
            } => Self::Failed {
                expected,
                actual,
                arg,
            },
            other => Self::Error {
                message: other.to_string(),
            },
        }
    }
}

/// Everything known about one scenario run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Scenario name.
    pub scenario: &'static str,
    /// Name of the driven model.
    pub model: String,
    /// Clock convention the run used.
    pub convention: ClockConvention,
    /// Sampler seed, for randomized scenarios.
    pub seed: Option<u64>,
    /// Go sequences completed.
    pub trials: u64,
    /// Value read from the return register by a fixed scenario.
    pub result: Option<i64>,
    /// Pass, fail, or error.
    pub verdict: Verdict,
    /// Driver statistics at the end of the run.
    pub stats: DriverStats,
}

impl Report {
    /// Returns `true` only for a `Passed` verdict.
    pub const fn passed(&self) -> bool {
        matches!(self.verdict, Verdict::Passed)
    }

    /// Process exit code for this report alone.
    pub const fn exit_code(&self) -> u8 {
        if self.passed() { EXIT_PASS } else { EXIT_FAIL }
    }
}

/// Exit code for a batch of reports: pass only if every report passed.
pub fn batch_exit_code(reports: &[Report]) -> u8 {
    if reports.iter().all(Report::passed) {
        EXIT_PASS
    } else {
        EXIT_FAIL
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(result) = self.result {
            writeln!(f, "result: {result}")?;
        }
        match &self.verdict {
            Verdict::Passed => write!(f, "test passed!"),
            Verdict::Failed {
                expected, actual, ..
            } => write!(f, "test failed: expected: {expected} but received: {actual}"),
            Verdict::Error { message } => write!(f, "test failed: {message}"),
        }
    }
}
