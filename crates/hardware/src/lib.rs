//! Cycle-level verification harness for compiled Pulsar hardware kernels.
//!
//! This crate drives a simulated hardware module through its go/done protocol and
//! checks the values it returns. It provides:
//! 1. **Device:** The `SimulatedModel` capability set any simulator backend adapter implements.
//! 2. **Models:** Behavioral register-transfer models of the kernels in the test catalog.
//! 3. **Simulation:** The `Driver` handle (`cycle`, `pump`, `reset`, `go`, argument/return access).
//! 4. **Scenarios:** Fixed and randomized verification procedures with atomic pass/fail reports.
//! 5. **Support:** Configuration, statistics and the crate-wide error type.

/// Common types (errors, constants).
pub mod common;
/// Harness configuration (driver timing, scenario sampling).
pub mod config;
/// Simulated-model capability set and clock conventions.
pub mod device;
/// Behavioral models of the compiled kernels.
pub mod models;
/// Verification scenarios, the built-in catalog and reports.
pub mod scenario;
/// Device driver.
pub mod sim;
/// Driver statistics.
pub mod stats;

/// Crate-wide error type and result alias.
pub use crate::common::error::{HarnessError, Result};
/// Root configuration type; use `HarnessConfig::default()` or deserialize from JSON.
pub use crate::config::HarnessConfig;
/// Capability set implemented by every simulated module adapter.
pub use crate::device::{ClockConvention, SimulatedModel};
/// Exclusive handle that drives a simulated module through reset and go sequences.
pub use crate::sim::Driver;
