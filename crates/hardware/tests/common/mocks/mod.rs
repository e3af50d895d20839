//! Mock model adapters.

/// Faulty models that wrap a real kernel.
pub mod faulty;

/// `mockall` mock of the `SimulatedModel` trait.
pub mod model;
