//! Simulation utilities and program loading.
//!
//! Provides the program image loader and the `Simulator` that drives a CPU
//! from reset to halt while collecting statistics.

pub mod loader;

/// Run driver owning the CPU and statistics.
pub mod simulator;

pub use simulator::Simulator;
