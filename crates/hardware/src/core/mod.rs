//! Core processor implementation.
//!
//! This module contains the CPU: its architectural state, the ALU, the opcode
//! dispatch table and the fetch-decode-execute loop that ties them together.

/// Architecture-specific state (flags register).
pub mod arch;

/// CPU core implementation and execution loop.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Cpu;
