//! Built-in scenarios.
//!
//! One entry per program in the compiled test-suite, plus the zero-argument boundary of
//! the two arithmetic kernels.

use super::{Check, Scenario};
use crate::common::error::{HarnessError, Result};
use crate::models::ModelKind;

fn double(x: i64) -> i64 {
    x.wrapping_mul(2)
}

fn square(x: i64) -> i64 {
    x.wrapping_mul(x)
}

/// Every built-in scenario, in run order.
pub const CATALOG: &[Scenario] = &[
    Scenario {
        name: "twice",
        model: ModelKind::Twice,
        check: Check::Randomized { oracle: double },
    },
    Scenario {
        name: "square",
        model: ModelKind::Square,
        check: Check::Randomized { oracle: square },
    },
    Scenario {
        name: "map",
        model: ModelKind::Map,
        check: Check::Fixed {
            args: &[],
            expected: 385,
        },
    },
    Scenario {
        name: "math",
        model: ModelKind::Math,
        check: Check::Fixed {
            args: &[],
            expected: 7,
        },
    },
    Scenario {
        name: "map_single",
        model: ModelKind::MapSingle,
        check: Check::Fixed {
            args: &[],
            expected: 2,
        },
    },
    Scenario {
        name: "twice_zero",
        model: ModelKind::Twice,
        check: Check::Fixed {
            args: &[0],
            expected: 0,
        },
    },
    Scenario {
        name: "square_zero",
        model: ModelKind::Square,
        check: Check::Fixed {
            args: &[0],
            expected: 0,
        },
    },
];

/// Looks up a catalog entry by name.
pub fn find(name: &str) -> Result<&'static Scenario> {
    CATALOG
        .iter()
        .find(|scenario| scenario.name == name)
        .ok_or_else(|| HarnessError::UnknownScenario(name.to_string()))
}
