use pulsar_harness::Result;
use pulsar_harness::device::{ClockConvention, SimulatedModel};

/// Forwards to an inner model but reads back a corrupted return register.
pub struct OffByOne<M> {
    pub inner: M,
}

impl<M: SimulatedModel> SimulatedModel for OffByOne<M> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn clock_convention(&self) -> ClockConvention {
        self.inner.clock_convention()
    }

    fn set_clock(&mut self, high: bool) {
        self.inner.set_clock(high);
    }

    fn clock(&self) -> bool {
        self.inner.clock()
    }

    fn set_reset(&mut self, high: bool) {
        self.inner.set_reset(high);
    }

    fn set_go(&mut self, high: bool) {
        self.inner.set_go(high);
    }

    fn done(&self) -> bool {
        self.inner.done()
    }

    fn eval(&mut self) {
        self.inner.eval();
    }

    fn arity(&self) -> usize {
        self.inner.arity()
    }

    fn set_arg(&mut self, index: usize, value: i64) -> Result<()> {
        self.inner.set_arg(index, value)
    }

    fn ret(&self) -> i64 {
        self.inner.ret() + 1
    }
}

/// A module whose done output never rises.
#[derive(Default)]
pub struct NeverDone {
    clk: bool,
    pub evals: u64,
}

impl SimulatedModel for NeverDone {
    fn name(&self) -> &str {
        "never_done"
    }

    fn clock_convention(&self) -> ClockConvention {
        ClockConvention::FullCycle
    }

    fn set_clock(&mut self, high: bool) {
        self.clk = high;
    }

    fn clock(&self) -> bool {
        self.clk
    }

    fn set_reset(&mut self, _high: bool) {}

    fn set_go(&mut self, _high: bool) {}

    fn done(&self) -> bool {
        false
    }

    fn eval(&mut self) {
        self.evals += 1;
    }

    fn arity(&self) -> usize {
        1
    }

    fn set_arg(&mut self, _index: usize, _value: i64) -> Result<()> {
        Ok(())
    }

    fn ret(&self) -> i64 {
        0
    }
}
