//! Verification scenarios.
//!
//! A scenario is a pure verification procedure: reset the device, supply inputs, run go,
//! compare the return register with an independently computed value. This module
//! provides:
//! 1. **Checks:** Fixed-input and randomized-input procedures (`Scenario`, `Check`).
//! 2. **Catalog:** The built-in scenarios, one or more per compiled kernel.
//! 3. **Reports:** `Report`, which renders the pass/fail message and the exit code from the
//!    same verdict.
//! 4. **Runner:** Builds models, seeds the sampler and turns each run into a report.

/// Built-in scenarios.
pub mod catalog;
/// Scenario reports and verdicts.
pub mod report;
/// Scenario runner.
pub mod runner;

use rand::Rng;
use tracing::debug;

use crate::common::error::{HarnessError, Result};
use crate::config::ScenarioConfig;
use crate::device::SimulatedModel;
use crate::models::ModelKind;
use crate::sim::Driver;

pub use catalog::{CATALOG, find};
pub use report::{Report, Verdict};
pub use runner::Runner;

/// Reference function a randomized scenario checks the device against.
pub type Oracle = fn(i64) -> i64;

/// How a scenario feeds and checks the device.
#[derive(Debug, Clone, Copy)]
pub enum Check {
    /// One go with fixed arguments and a literal expected value.
    Fixed {
        /// Values for argument registers `0..args.len()`.
        args: &'static [i64],
        /// Expected return value.
        expected: i64,
    },
    /// Repeated go sequences with argument 0 sampled uniformly from `[0, bound)`.
    Randomized {
        /// Computes the expected return value for a sampled argument.
        oracle: Oracle,
    },
}

impl Check {
    /// Short name of the check kind.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Fixed { .. } => "fixed",
            Self::Randomized { .. } => "randomized",
        }
    }
}

/// A named verification procedure against one kernel.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    /// Scenario name.
    pub name: &'static str,
    /// Kernel under test.
    pub model: ModelKind,
    /// Inputs and expectation.
    pub check: Check,
}

/// What a passing scenario observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Go sequences run.
    pub trials: u64,
    /// Last value read from the return register.
    pub last_result: i64,
}

impl Scenario {
    /// Runs the procedure on `driver`, starting with a reset.
    ///
    /// Stops at the first mismatch. Randomized checks draw arguments from `rng`.
    pub fn run<M: SimulatedModel>(
        &self,
        driver: &mut Driver<M>,
        config: &ScenarioConfig,
        rng: &mut impl Rng,
    ) -> Result<Outcome> {
        driver.reset();
        match self.check {
            Check::Fixed { args, expected } => {
                let actual = driver.call(args)?;
                debug!(scenario = self.name, actual, "fixed result");
                if actual != expected {
                    return Err(HarnessError::Mismatch {
                        expected,
                        actual,
                        arg: args.first().copied(),
                    });
                }
                Ok(Outcome {
                    trials: 1,
                    last_result: actual,
                })
            }
            Check::Randomized { oracle } => {
                let mut last_result = 0;
                for _ in 0..config.trials {
                    let arg = rng.gen_range(0..config.bound);
                    let actual = driver.call(&[arg])?;
                    let expected = oracle(arg);
                    if actual != expected {
                        return Err(HarnessError::Mismatch {
                            expected,
                            actual,
                            arg: Some(arg),
                        });
                    }
                    last_result = actual;
                }
                Ok(Outcome {
                    trials: config.trials,
                    last_result,
                })
            }
        }
    }
}
