//! Harness error definitions.
//!
//! This module defines every failure the harness can report. It provides:
//! 1. **Verification Failure:** `Mismatch`, the only way a correctly driven device fails a check.
//! 2. **Protocol Failures:** A device that never completes, never releases done, or is driven
//!    before reset.
//! 3. **Lookup and Setup Failures:** Unknown argument registers or scenarios, unreadable or
//!    malformed configuration.

use thiserror::Error;

/// Errors produced while driving a simulated module or running a scenario.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The device returned a value other than the independently computed one.
    ///
    /// `arg` carries the sampled argument for randomized scenarios so the failing
    /// trial can be reproduced.
    #[error("test failed: expected: {expected} but received: {actual}")]
    Mismatch {
        /// Value computed by the reference oracle.
        expected: i64,
        /// Value read from the return register.
        actual: i64,
        /// Argument supplied for the failing trial, if any.
        arg: Option<i64>,
    },

    /// The device did not raise done within the configured cycle bound.
    #[error("device did not raise done within {limit} cycles")]
    CycleLimitExceeded {
        /// Maximum number of cycles the driver was allowed to wait.
        limit: u64,
    },

    /// Done was still asserted after go was released and the driver settled.
    ///
    /// A following `go()` would observe the stale completion and read an old result.
    #[error("done still asserted after go was released ({convention} clock, {settle} settle)")]
    DoneNotCleared {
        /// Clock convention in effect.
        convention: crate::device::ClockConvention,
        /// Settle policy in effect.
        settle: crate::config::SettlePolicy,
    },

    /// `go()` was invoked before the reset sequence.
    #[error("device driven before reset")]
    NotReset,

    /// An argument register index beyond the model's arity was written.
    #[error("argument register {index} does not exist (module has {arity})")]
    UnknownArgument {
        /// Requested register index.
        index: usize,
        /// Number of argument registers the module exposes.
        arity: usize,
    },

    /// A scenario name that is not part of the catalog.
    #[error("unknown scenario `{0}`")]
    UnknownScenario(String),

    /// Configuration values that cannot drive a run.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    /// Malformed configuration document.
    #[error("malformed configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Configuration file could not be read.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl HarnessError {
    /// Returns `true` for a value comparison failure, `false` for protocol and setup errors.
    pub const fn is_mismatch(&self) -> bool {
        matches!(self, Self::Mismatch { .. })
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, HarnessError>;
