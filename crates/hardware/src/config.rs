//! Configuration system for the harness.
//!
//! This module defines the configuration structures used to parameterize a run. It
//! provides:
//! 1. **Defaults:** The fixed protocol timing and sampling constants.
//! 2. **Structures:** Driver timing (`DriverConfig`) and scenario sampling (`ScenarioConfig`).
//! 3. **Enums:** The settle policy applied after a go sequence completes.
//!
//! Configuration is supplied as JSON (every field optional) or taken from
//! `HarnessConfig::default()`; the CLI layers its flags on top.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::error::{HarnessError, Result};

/// Default configuration constants for the harness.
mod defaults {
    use crate::common::constants;

    /// Cycles advanced by one pump.
    pub const PUMP_CYCLES: u64 = constants::PUMP_CYCLES;

    /// Go sequences per randomized scenario.
    pub const TRIALS: u64 = constants::DEFAULT_TRIALS;

    /// Exclusive upper bound of sampled arguments.
    pub const SAMPLE_BOUND: i64 = constants::DEFAULT_SAMPLE_BOUND;
}

/// What `go()` does after releasing the go signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SettlePolicy {
    /// Advance a full pump (`pump_cycles` cycles).
    #[default]
    Pump,
    /// Advance exactly one cycle.
    ///
    /// Under the single-edge clock convention one cycle is only half a period, which is
    /// not enough for the module to drop done; the driver reports that as an error.
    SingleCycle,
}

impl SettlePolicy {
    /// Kebab-case name, as accepted by `FromStr` and the configuration file.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pump => "pump",
            Self::SingleCycle => "single-cycle",
        }
    }
}

impl fmt::Display for SettlePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettlePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pump" => Ok(Self::Pump),
            "single-cycle" => Ok(Self::SingleCycle),
            other => Err(format!("unknown settle policy `{other}` (expected pump or single-cycle)")),
        }
    }
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use pulsar_harness::config::{HarnessConfig, SettlePolicy};
///
/// let json = r#"{ "driver": { "max_cycles": 5000, "settle": "single-cycle" } }"#;
/// let config = HarnessConfig::from_json_str(json).unwrap();
/// assert_eq!(config.driver.max_cycles, Some(5000));
/// assert_eq!(config.driver.settle, SettlePolicy::SingleCycle);
/// assert_eq!(config.scenario.trials, 1000);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HarnessConfig {
    /// Driver timing.
    #[serde(default)]
    pub driver: DriverConfig,
    /// Scenario sampling.
    #[serde(default)]
    pub scenario: ScenarioConfig,
}

impl HarnessConfig {
    /// Parses a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Rejects values no run can use.
    ///
    /// A zero pump never crosses a rising edge, so reset and settle would do nothing. Zero
    /// trials would pass a randomized scenario without a single go.
    pub fn validate(&self) -> Result<()> {
        if self.driver.pump_cycles == 0 {
            return Err(HarnessError::InvalidConfig("driver.pump_cycles must be positive"));
        }
        if self.scenario.trials == 0 {
            return Err(HarnessError::InvalidConfig("scenario.trials must be positive"));
        }
        if self.scenario.bound <= 0 {
            return Err(HarnessError::InvalidConfig("scenario.bound must be positive"));
        }
        if self.driver.max_cycles == Some(0) {
            return Err(HarnessError::InvalidConfig("driver.max_cycles must be positive"));
        }
        Ok(())
    }
}

/// Driver timing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DriverConfig {
    /// Cycles advanced by one `pump()`.
    #[serde(default = "DriverConfig::default_pump_cycles")]
    pub pump_cycles: u64,
    /// Upper bound on cycles spent waiting for done; `None` waits forever.
    #[serde(default)]
    pub max_cycles: Option<u64>,
    /// What `go()` does after releasing go.
    #[serde(default)]
    pub settle: SettlePolicy,
}

impl DriverConfig {
    /// Returns the default pump length.
    fn default_pump_cycles() -> u64 {
        defaults::PUMP_CYCLES
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            pump_cycles: defaults::PUMP_CYCLES,
            max_cycles: None,
            settle: SettlePolicy::Pump,
        }
    }
}

/// Scenario sampling configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScenarioConfig {
    /// Go sequences per randomized scenario.
    #[serde(default = "ScenarioConfig::default_trials")]
    pub trials: u64,
    /// Exclusive upper bound of sampled arguments; samples lie in `[0, bound)`.
    #[serde(default = "ScenarioConfig::default_bound")]
    pub bound: i64,
    /// Seed for the argument sampler; drawn from OS entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl ScenarioConfig {
    /// Returns the default trial count.
    fn default_trials() -> u64 {
        defaults::TRIALS
    }

    /// Returns the default sample bound.
    fn default_bound() -> i64 {
        defaults::SAMPLE_BOUND
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            trials: defaults::TRIALS,
            bound: defaults::SAMPLE_BOUND,
            seed: None,
        }
    }
}
