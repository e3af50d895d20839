//! # Unit Components
//!
//! Tests grouped by the part of the harness they exercise.

/// Configuration defaults, JSON parsing and validation.
pub mod config;


/// Behavioral models: kernel results and reset idempotence.
pub mod models;

/// Scenarios, reports and failure propagation.
pub mod scenario;
