//! Device driving.
//!
//! Provides the `Driver`, the exclusive handle that moves a simulated module through its
//! reset and go/done protocol.

pub mod driver;

pub use driver::Driver;
