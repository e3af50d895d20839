//! Scenario runner.
//!
//! The runner owns the resolved configuration for a batch: driver timing, sampling
//! parameters, an optional clock-convention override and the sampler seed. Every
//! scenario gets a fresh model, a fresh driver and a sampler seeded from the same value, so
//! a reported seed reproduces the whole batch.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use super::report::{Report, Verdict};
use super::{Check, Scenario, catalog};
use crate::common::error::{HarnessError, Result};
use crate::config::HarnessConfig;
use crate::device::{ClockConvention, SimulatedModel};
use crate::sim::Driver;

/// Runs scenarios and turns them into reports.
#[derive(Debug, Clone)]
pub struct Runner {
    config: HarnessConfig,
    convention: Option<ClockConvention>,
    seed: u64,
}

impl Runner {
    /// Creates a runner. Without a configured seed one is drawn from OS entropy.
    ///
    /// Fails with `InvalidConfig` for settings no run can use (see `HarnessConfig::validate`).
    pub fn new(config: HarnessConfig) -> Result<Self> {
        config.validate()?;
        let seed = config.scenario.seed.unwrap_or_else(rand::random);
        Ok(Self {
            config,
            convention: None,
            seed,
        })
    }

    /// Forces every built model to declare `convention` instead of its default.
    #[must_use]
    pub fn with_convention(mut self, convention: Option<ClockConvention>) -> Self {
        self.convention = convention;
        self
    }

    /// Returns the sampler seed.
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the configuration.
    pub const fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Runs a catalog scenario on a freshly built model.
    pub fn run(&self, scenario: &Scenario) -> Report {
        let convention = self
            .convention
            .unwrap_or_else(|| scenario.model.default_convention());
        self.run_on(scenario, scenario.model.build_with(convention))
    }

    /// Runs `scenario` against an arbitrary model adapter.
    pub fn run_on<M: SimulatedModel>(&self, scenario: &Scenario, model: M) -> Report {
        let mut driver = Driver::with_config(model, self.config.driver.clone());
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let fixed = matches!(scenario.check, Check::Fixed { .. });

        let (verdict, result) = match scenario.run(&mut driver, &self.config.scenario, &mut rng) {
            Ok(outcome) => (Verdict::Passed, fixed.then_some(outcome.last_result)),
            Err(err) => {
                warn!(scenario = scenario.name, error = %err, "scenario failed");
                let actual = match &err {
                    HarnessError::Mismatch { actual, .. } if fixed => Some(*actual),
                    _ => None,
                };
                (Verdict::from(err), actual)
            }
        };

        let stats = *driver.stats();
        let report = Report {
            scenario: scenario.name,
            model: driver.model().name().to_string(),
            convention: driver.convention(),
            seed: (!fixed).then_some(self.seed),
            trials: stats.gos,
            result,
            verdict,
            stats,
        };
        info!(
            scenario = report.scenario,
            passed = report.passed(),
            trials = report.trials,
            cycles = stats.cycles,
            "scenario finished"
        );
        report
    }

    /// Runs the named catalog scenarios in order.
    ///
    /// Every name is resolved before anything runs, so an unknown name fails the whole
    /// batch up front.
    pub fn run_named<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<Report>> {
        let scenarios = names
            .iter()
            .map(|name| catalog::find(name.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(scenarios.into_iter().map(|s| self.run(s)).collect())
    }

    /// Runs the whole catalog.
    pub fn run_all(&self) -> Vec<Report> {
        catalog::CATALOG.iter().map(|s| self.run(s)).collect()
    }
}
