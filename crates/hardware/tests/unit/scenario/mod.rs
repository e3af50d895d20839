//! # Scenario Tests

/// Catalog lookups and fixed expectations.
pub mod catalog;
