//! Go/done handshake shared by every compiled kernel.
//!
//! A compiled component sits idle until go is sampled high on a rising edge, runs its
//! datapath one step per edge, then raises done for exactly one clock period with the
//! result latched in the return register. Reset is synchronous and takes priority over
//! everything else.
//!
//! Argument registers are plain inputs: the kernel latches them when it starts, and reset
//! leaves them alone.

use std::fmt;

use crate::common::constants::MAX_ARGUMENTS;
use crate::common::error::{HarnessError, Result};
use crate::device::{ClockConvention, SimulatedModel};

/// Datapath of one compiled program.
///
/// `step` is called once per rising edge while the component is busy. It returns the
/// result on the edge the computation finishes.
pub trait Kernel: fmt::Debug + Clone + PartialEq {
    /// Program name.
    fn name(&self) -> &'static str;
    /// Number of argument registers the program reads.
    fn arity(&self) -> usize;
    /// Restores registers and memories to their power-on contents.
    fn reset(&mut self);
    /// Latches the arguments and prepares the first step.
    fn start(&mut self, args: &[i64]);
    /// Advances the datapath by one clock edge.
    fn step(&mut self) -> Option<i64>;
}

/// Control state of the handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for go.
    Idle,
    /// Running the datapath.
    Busy,
    /// Done asserted for the current period.
    Done,
}

/// Architectural state of a `ClockedModel`, excluding input levels.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<K> {
    /// Handshake phase.
    pub phase: Phase,
    /// Done output.
    pub done: bool,
    /// Return register.
    pub ret: i64,
    /// Datapath registers and memories.
    pub kernel: K,
}

/// A kernel wrapped in the go/done/reset handshake, exposed as a `SimulatedModel`.
#[derive(Debug, Clone)]
pub struct ClockedModel<K: Kernel> {
    kernel: K,
    convention: ClockConvention,
    clk: bool,
    reset: bool,
    go: bool,
    args: Vec<i64>,
    sampled_clk: bool,
    phase: Phase,
    done: bool,
    ret: i64,
}

impl<K: Kernel> ClockedModel<K> {
    /// Wraps `kernel`, declaring `convention` to the driver.
    pub fn new(mut kernel: K, convention: ClockConvention) -> Self {
        kernel.reset();
        let arity = kernel.arity().min(MAX_ARGUMENTS);
        Self {
            kernel,
            convention,
            clk: false,
            reset: false,
            go: false,
            args: vec![0; arity],
            sampled_clk: false,
            phase: Phase::Idle,
            done: false,
            ret: 0,
        }
    }

    /// Returns the current handshake phase.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the datapath.
    pub const fn kernel(&self) -> &K {
        &self.kernel
    }

    /// Captures the architectural state for comparison.
    pub fn snapshot(&self) -> Snapshot<K> {
        Snapshot {
            phase: self.phase,
            done: self.done,
            ret: self.ret,
            kernel: self.kernel.clone(),
        }
    }

    fn rising_edge(&mut self) {
        if self.reset {
            self.kernel.reset();
            self.phase = Phase::Idle;
            self.done = false;
            self.ret = 0;
            return;
        }

        match self.phase {
            Phase::Idle => {
                if self.go {
                    self.kernel.start(&self.args);
                    self.phase = Phase::Busy;
                }
            }
            Phase::Busy => {
                if let Some(value) = self.kernel.step() {
                    self.ret = value;
                    self.done = true;
                    self.phase = Phase::Done;
                }
            }
            Phase::Done => {
                self.done = false;
                self.phase = Phase::Idle;
            }
        }
    }
}

impl<K: Kernel> SimulatedModel for ClockedModel<K> {
    fn name(&self) -> &str {
        self.kernel.name()
    }

    fn clock_convention(&self) -> ClockConvention {
        self.convention
    }

    fn set_clock(&mut self, high: bool) {
        self.clk = high;
    }

    fn clock(&self) -> bool {
        self.clk
    }

    fn set_reset(&mut self, high: bool) {
        self.reset = high;
    }

    fn set_go(&mut self, high: bool) {
        self.go = high;
    }

    fn done(&self) -> bool {
        self.done
    }

    fn eval(&mut self) {
        let rising = self.clk && !self.sampled_clk;
        self.sampled_clk = self.clk;
        if rising {
            self.rising_edge();
        }
    }

    fn arity(&self) -> usize {
        self.args.len()
    }

    fn set_arg(&mut self, index: usize, value: i64) -> Result<()> {
        let arity = self.args.len();
        let slot = self
            .args
            .get_mut(index)
            .ok_or(HarnessError::UnknownArgument { index, arity })?;
        *slot = value;
        Ok(())
    }

    fn ret(&self) -> i64 {
        self.ret
    }
}
