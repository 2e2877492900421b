//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the LS-8 opcode table, opcode bit-field extraction, decoding into
//! ALU and control operations, and a disassembler.

/// Opcode to operation decoding (`AluOp`, `ControlOp`).
pub mod decode;

/// Instruction disassembler for debug tracing and program listings.
pub mod disasm;

/// Opcode bit-field extraction and the fetched instruction structure.
pub mod instruction;

/// Opcode byte definitions.
pub mod opcodes;

pub use decode::{AluOp, ControlOp};
pub use instruction::{Fetched, InstructionBits};
