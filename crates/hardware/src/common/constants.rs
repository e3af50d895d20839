//! Harness-wide constants.
//!
//! These values mirror the shape of the modules the Pulsar compiler emits: a single
//! return register, up to ten argument registers and a fixed settling window after
//! every control change.

/// Number of argument registers (`arg0` through `arg9`) a generated module may expose.
pub const MAX_ARGUMENTS: usize = 10;

/// Cycles advanced by one `pump()` to let signals settle after a control change.
pub const PUMP_CYCLES: u64 = 10;

/// Go sequences run by a randomized scenario unless configured otherwise.
pub const DEFAULT_TRIALS: u64 = 1000;

/// Exclusive upper bound of randomly sampled arguments (samples lie in `[0, 999]`).
pub const DEFAULT_SAMPLE_BOUND: i64 = 1000;
