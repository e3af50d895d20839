//! Simulated device abstraction.
//!
//! A simulated device is an opaque hardware module with four control signals (clock,
//! reset, go, done), numbered argument inputs and a return register. This module
//! provides:
//! 1. **Traits:** `SimulatedModel`, the capability set a backend adapter implements.
//! 2. **Clocking:** `ClockConvention`, how one driver cycle maps onto clock edges and evals.

/// Clock conventions declared by adapters.
pub mod clock;
/// Simulated-model capability set.
pub mod traits;

pub use clock::ClockConvention;
pub use traits::SimulatedModel;
