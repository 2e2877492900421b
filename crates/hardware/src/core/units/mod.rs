//! Execution units.
//!
//! LS-8 has a single functional unit, the ALU; control-flow and stack
//! instructions are executed by the CPU's dispatch table.

/// Arithmetic Logic Unit for 8-bit operations.
pub mod alu;
