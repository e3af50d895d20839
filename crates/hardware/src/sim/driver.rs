//! Device driver.
//!
//! The driver owns one simulated module and implements the operational protocol every
//! compiled Pulsar module follows:
//! 1. **Clocking:** `cycle` advances time in the module's declared convention; `pump`
//!    advances a fixed settling window.
//! 2. **Reset:** Hold reset for a pump, release it, pump again.
//! 3. **Go/Done:** Raise go, poll done one cycle at a time, release go and settle.
//! 4. **Data:** Numbered argument registers before go, the return register after.
//!
//! The completion wait is a blocking poll. Cycle-accurate simulation has no wall-clock
//! deadline, so by default a module that never raises done keeps the driver spinning; set
//! `DriverConfig::max_cycles` to turn that into `HarnessError::CycleLimitExceeded`.

use tracing::{debug, trace, warn};

use crate::common::error::{HarnessError, Result};
use crate::config::{DriverConfig, SettlePolicy};
use crate::device::{ClockConvention, SimulatedModel};
use crate::stats::DriverStats;

/// Exclusive handle on a simulated module.
#[derive(Debug)]
pub struct Driver<M: SimulatedModel> {
    model: M,
    config: DriverConfig,
    convention: ClockConvention,
    stats: DriverStats,
    is_reset: bool,
}

impl<M: SimulatedModel> Driver<M> {
    /// Wraps `model` with the default driver configuration.
    pub fn new(model: M) -> Self {
        Self::with_config(model, DriverConfig::default())
    }

    /// Wraps `model` with an explicit driver configuration.
    ///
    /// The clock convention is taken from the model; the driver never substitutes its own.
    pub fn with_config(model: M, config: DriverConfig) -> Self {
        let convention = model.clock_convention();
        Self {
            model,
            config,
            convention,
            stats: DriverStats::default(),
            is_reset: false,
        }
    }

    /// Returns the driven model.
    pub const fn model(&self) -> &M {
        &self.model
    }

    /// Returns the driven model mutably, for backend-specific inspection.
    pub const fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Releases the model.
    pub fn into_inner(self) -> M {
        self.model
    }

    /// Returns the driver configuration.
    pub const fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Returns the clock convention in use.
    pub const fn convention(&self) -> ClockConvention {
        self.convention
    }

    /// Returns the statistics accumulated so far.
    pub const fn stats(&self) -> &DriverStats {
        &self.stats
    }

    /// Advances simulated time by one driver cycle.
    ///
    /// `SingleEdge` inverts the clock and evaluates once. `FullCycle` drives the clock low
    /// and evaluates, then high and evaluates.
    pub fn cycle(&mut self) {
        match self.convention {
            ClockConvention::SingleEdge => {
                let level = !self.model.clock();
                self.drive_clock(level);
            }
            ClockConvention::FullCycle => {
                self.drive_clock(false);
                self.drive_clock(true);
            }
        }
        self.stats.cycles += 1;
        trace!(cycle = self.stats.cycles, done = self.model.done(), "cycle");
    }

    /// Advances `pump_cycles` cycles without looking at any output.
    pub fn pump(&mut self) {
        for _ in 0..self.config.pump_cycles {
            self.cycle();
        }
    }

    /// Runs the reset sequence: assert reset, pump, release reset, pump.
    ///
    /// Must precede the first `go()`. Running it again returns the module to the same
    /// initial state whatever it did in between.
    pub fn reset(&mut self) {
        self.model.set_go(false);
        self.model.set_reset(true);
        self.pump();
        self.model.set_reset(false);
        self.pump();
        self.is_reset = true;
        self.stats.resets += 1;
        debug!(model = self.model.name(), convention = %self.convention, "reset complete");
    }

    /// Runs one go sequence: raise go, cycle until done, release go, settle.
    ///
    /// Fails with `NotReset` before the first `reset()`, with `CycleLimitExceeded` when a
    /// configured bound runs out, and with `DoneNotCleared` when done is still high after
    /// settling (a following go would otherwise complete instantly with a stale result).
    pub fn go(&mut self) -> Result<()> {
        if !self.is_reset {
            return Err(HarnessError::NotReset);
        }

        self.model.set_go(true);
        let mut waited = 0_u64;
        while !self.model.done() {
            if let Some(limit) = self.config.max_cycles.filter(|&limit| waited >= limit) {
                self.model.set_go(false);
                warn!(model = self.model.name(), limit, "done never raised");
                return Err(HarnessError::CycleLimitExceeded { limit });
            }
            self.cycle();
            waited += 1;
        }
        self.model.set_go(false);

        match self.config.settle {
            SettlePolicy::Pump => self.pump(),
            SettlePolicy::SingleCycle => self.cycle(),
        }
        if self.model.done() {
            warn!(
                model = self.model.name(),
                convention = %self.convention,
                settle = %self.config.settle,
                "done still asserted after settle"
            );
            return Err(HarnessError::DoneNotCleared {
                convention: self.convention,
                settle: self.config.settle,
            });
        }

        self.stats.record_go(waited);
        debug!(model = self.model.name(), waited, ret = self.model.ret(), "go complete");
        Ok(())
    }

    /// Writes argument register `index`. Takes effect at the next go.
    pub fn set_arg(&mut self, index: usize, value: i64) -> Result<()> {
        self.model.set_arg(index, value)
    }

    /// Reads the return register.
    pub fn ret(&self) -> i64 {
        self.model.ret()
    }

    /// Writes `args` to registers `0..args.len()`, runs one go sequence and returns the
    /// result.
    pub fn call(&mut self, args: &[i64]) -> Result<i64> {
        for (index, &value) in args.iter().enumerate() {
            self.set_arg(index, value)?;
        }
        self.go()?;
        Ok(self.ret())
    }

    fn drive_clock(&mut self, high: bool) {
        if high && !self.model.clock() {
            self.stats.rising_edges += 1;
        }
        self.model.set_clock(high);
        self.model.eval();
        self.stats.evals += 1;
    }
}
