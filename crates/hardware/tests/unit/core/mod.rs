//! Processor core tests.


/// Execution engine, dispatch table, stack and control-flow tests.
pub mod cpu;
