//! Common types used throughout the harness.
//!
//! This module provides the building blocks shared by the driver, the models and the
//! scenarios. It includes:
//! 1. **Constants:** Register-file limits and the fixed protocol timing.
//! 2. **Error Handling:** The crate-wide `HarnessError` and its `Result` alias.

/// Register-file limits and protocol timing constants.
pub mod constants;

/// Error types.
pub mod error;

pub use constants::{MAX_ARGUMENTS, PUMP_CYCLES};
pub use error::{HarnessError, Result};
