//! Driver statistics collection and reporting.
//!
//! This module tracks what the driver did to the simulated device. It provides:
//! 1. **Time:** Driver cycles, model evaluations and observed rising clock edges.
//! 2. **Protocol:** Reset and go sequence counts.
//! 3. **Latency:** Cycles spent waiting for done, in total and for the slowest go.

use std::fmt;

use serde::Serialize;

/// Counters accumulated by a `Driver` over its lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DriverStats {
    /// Calls to `cycle()`, including those made by `pump()`.
    pub cycles: u64,
    /// Calls to the model's `eval()`.
    pub evals: u64,
    /// Low-to-high clock transitions driven into the model.
    pub rising_edges: u64,
    /// Completed reset sequences.
    pub resets: u64,
    /// Completed go sequences.
    pub gos: u64,
    /// Cycles spent polling for done across all go sequences.
    pub wait_cycles: u64,
    /// Longest single wait for done, in cycles.
    pub max_wait_cycles: u64,
}

impl DriverStats {
    /// Records the wait of one completed go sequence.
    pub(crate) fn record_go(&mut self, waited: u64) {
        self.gos += 1;
        self.wait_cycles += waited;
        self.max_wait_cycles = self.max_wait_cycles.max(waited);
    }

    /// Mean cycles waited per go sequence, or zero before the first one.
    pub fn mean_wait_cycles(&self) -> f64 {
        if self.gos == 0 {
            0.0
        } else {
            self.wait_cycles as f64 / self.gos as f64
        }
    }
}

impl fmt::Display for DriverStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "driver.cycles            {}", self.cycles)?;
        writeln!(f, "driver.evals             {}", self.evals)?;
        writeln!(f, "driver.rising_edges      {}", self.rising_edges)?;
        writeln!(f, "protocol.resets          {}", self.resets)?;
        writeln!(f, "protocol.gos             {}", self.gos)?;
        writeln!(f, "wait.total               {}", self.wait_cycles)?;
        writeln!(f, "wait.max                 {}", self.max_wait_cycles)?;
        writeln!(f, "wait.mean                {:.2}", self.mean_wait_cycles())?;
        write!(f, "----------------------------------------------------------")
    }
}
