//! Clock conventions.
//!
//! Backends disagree on what one driver "cycle" means. Some expect a single clock flip
//! followed by an evaluation, so a full clock period takes two cycles; others expect the
//! driver to run both half-periods with an evaluation each. An adapter declares which one
//! its backend is written against and the driver honours it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How `Driver::cycle` toggles the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClockConvention {
    /// Invert the clock and evaluate once. A rising edge happens every other cycle.
    #[default]
    SingleEdge,
    /// Drive the clock low and evaluate, then high and evaluate. Every cycle has a
    /// rising edge.
    FullCycle,
}

impl ClockConvention {
    /// Every convention, in declaration order.
    pub const ALL: [Self; 2] = [Self::SingleEdge, Self::FullCycle];

    /// Number of `eval()` calls one driver cycle performs.
    pub const fn evals_per_cycle(self) -> u64 {
        match self {
            Self::SingleEdge => 1,
            Self::FullCycle => 2,
        }
    }

    /// Kebab-case name, as accepted by `FromStr` and the configuration file.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SingleEdge => "single-edge",
            Self::FullCycle => "full-cycle",
        }
    }
}

impl fmt::Display for ClockConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClockConvention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown clock convention `{s}` (expected single-edge or full-cycle)"))
    }
}
