//! Global System Constants.
//!
//! This module defines machine-wide constants used across the emulator. It includes:
//! 1. **Memory Constants:** Address space size and the initial stack location.
//! 2. **Register Constants:** Register count and the index reserved for the stack pointer.
//! 3. **Instruction Constants:** Opcode field masks and shifts for instruction decoding.

/// Number of addressable bytes in main memory.
pub const MEMORY_SIZE: usize = 256;

/// Number of general-purpose registers (`R0`-`R7`).
pub const NUM_REGISTERS: usize = 8;

/// Register index holding the stack pointer.
pub const SP_REGISTER: usize = 7;

/// Initial stack pointer value (`0xF4`); the stack grows downward from here.
pub const INITIAL_SP: u8 = 0xF4;

/// Bit position shift for the operand-count field (bits 7-6).
pub const OPERAND_COUNT_SHIFT: u8 = 6;

/// Bit position shift for the ALU-class flag (bit 5).
pub const ALU_FLAG_SHIFT: u8 = 5;

/// Bit position shift for the sets-PC flag (bit 4).
pub const SETS_PC_SHIFT: u8 = 4;

/// Bit mask for the operation identifier (bits 3-0).
pub const OPERATION_ID_MASK: u8 = 0x0F;

/// Width of the longest instruction in bytes (opcode plus two operands).
pub const MAX_INSTRUCTION_BYTES: usize = 3;
