//! Simulated-model trait.
//!
//! This module defines `SimulatedModel`, implemented by every adapter that exposes a
//! simulated hardware module to the driver. It provides:
//! 1. **Identification:** `name` and the backend's declared `clock_convention`.
//! 2. **Control Signals:** Typed setters for clock, reset and go; a getter for done.
//! 3. **Evaluation:** `eval`, one settle of the module's logic for the current inputs.
//! 4. **Data Registers:** Numbered argument inputs and the return register.
//!
//! Adapters are plain owned values; the driver holds exactly one per run.

use crate::common::error::Result;
use crate::device::ClockConvention;

/// Capability set of a simulated hardware module.
///
/// Setters only change input levels. Nothing observable changes until `eval` runs, in the
/// same way a generated simulator model only propagates its inputs when evaluated.
pub trait SimulatedModel {
    /// Returns the module's name (e.g., `"twice"`).
    fn name(&self) -> &str;
    /// Returns the clock convention the backend is written against.
    fn clock_convention(&self) -> ClockConvention;

    /// Drives the clock input to the given level.
    fn set_clock(&mut self, high: bool);
    /// Returns the level currently driven on the clock input.
    fn clock(&self) -> bool;
    /// Drives the reset input.
    fn set_reset(&mut self, high: bool);
    /// Drives the go input.
    fn set_go(&mut self, high: bool);
    /// Returns the done output as of the last `eval`.
    fn done(&self) -> bool;

    /// Evaluates the module's logic for the current inputs.
    fn eval(&mut self);

    /// Returns the number of argument registers the module exposes.
    fn arity(&self) -> usize;
    /// Writes argument register `index`; fails when `index >= arity()`.
    fn set_arg(&mut self, index: usize, value: i64) -> Result<()>;
    /// Returns the return register as of the last `eval`.
    fn ret(&self) -> i64;
}

impl<M: SimulatedModel + ?Sized> SimulatedModel for Box<M> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn clock_convention(&self) -> ClockConvention {
        (**self).clock_convention()
    }

    fn set_clock(&mut self, high: bool) {
        (**self).set_clock(high);
    }

    fn clock(&self) -> bool {
        (**self).clock()
    }

    fn set_reset(&mut self, high: bool) {
        (**self).set_reset(high);
    }

    fn set_go(&mut self, high: bool) {
        (**self).set_go(high);
    }

    fn done(&self) -> bool {
        (**self).done()
    }

    fn eval(&mut self) {
        (**self).eval();
    }

    fn arity(&self) -> usize {
        (**self).arity()
    }

    fn set_arg(&mut self, index: usize, value: i64) -> Result<()> {
        (**self).set_arg(index, value)
    }

    fn ret(&self) -> i64 {
        (**self).ret()
    }
}
