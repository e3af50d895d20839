//! Behavioral models of compiled kernels.
//!
//! Each model stands in for the simulator a generated module would be compiled into: it
//! exposes the same control signals and registers and only reacts on rising clock edges.
//! This module provides:
//! 1. **Handshake:** `ClockedModel`, the go/done/reset wrapper shared by every kernel.
//! 2. **Kernels:** The datapaths of the catalog programs (`twice`, `square`, `map`,
//!    `math`, `map_single`).
//! 3. **Registry:** `ModelKind`, which names the kernels and builds boxed models.

/// Scalar arithmetic kernels (`twice`, `square`).
pub mod arith;
/// Go/done handshake wrapper and the `Kernel` trait.
pub mod handshake;
/// Memory-walking kernels (`map`, `map_single`).
pub mod map;
/// Constant expression kernel (`math`).
pub mod math;

use std::fmt;

use serde::Serialize;

use crate::device::{ClockConvention, SimulatedModel};

pub use arith::{Doubler, Squarer};
pub use handshake::{ClockedModel, Kernel, Phase, Snapshot};
pub use map::{MapIncrement, SumOfSquares};
pub use math::MultiplyAdd;

/// The kernels shipped with the harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    /// Doubles argument 0.
    Twice,
    /// Squares argument 0.
    Square,
    /// Squares each element of `[1, 2, ..., 10]` in place, then sums them.
    Map,
    /// Evaluates `1 + 2 * 3`.
    Math,
    /// Adds one to each element of `[1]` and returns element 0.
    MapSingle,
}

impl ModelKind {
    /// Every kernel, in catalog order.
    pub const ALL: [Self; 5] = [Self::Twice, Self::Square, Self::Map, Self::Math, Self::MapSingle];

    /// Name of the kernel, matching the program it was compiled from.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Twice => "twice",
            Self::Square => "square",
            Self::Map => "map",
            Self::Math => "math",
            Self::MapSingle => "map_single",
        }
    }

    /// Clock convention the kernel's backend is written against.
    pub const fn default_convention(self) -> ClockConvention {
        match self {
            Self::Twice | Self::Square => ClockConvention::SingleEdge,
            Self::Map | Self::Math | Self::MapSingle => ClockConvention::FullCycle,
        }
    }

    /// Builds the model with its default clock convention.
    pub fn build(self) -> Box<dyn SimulatedModel> {
        self.build_with(self.default_convention())
    }

    /// Builds the model declaring `convention` instead of its default.
    pub fn build_with(self, convention: ClockConvention) -> Box<dyn SimulatedModel> {
        match self {
            Self::Twice => Box::new(ClockedModel::new(Doubler::default(), convention)),
            Self::Square => Box::new(ClockedModel::new(Squarer::default(), convention)),
            Self::Map => Box::new(ClockedModel::new(SumOfSquares::default(), convention)),
            Self::Math => Box::new(ClockedModel::new(MultiplyAdd::default(), convention)),
            Self::MapSingle => Box::new(ClockedModel::new(MapIncrement::default(), convention)),
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
