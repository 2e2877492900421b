//! Shared test infrastructure: the machine-code builder and the CPU harness.

pub mod builder;

#[cfg(test)]
mod infrastructure_tests;

pub use builder::ProgramBuilder;
pub use harness::TestContext;
