//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions for the LS-8 opcode byte and the
//! fetched instruction structure. The opcode layout is the single source of
//! truth for instruction length, ALU routing and PC ownership:
//!
//! ```text
//!  7 6   5   4   3 2 1 0
//! [ NN | A | S | I I I I ]
//!   |    |   |   operation identifier
//!   |    |   sets PC itself
//!   |    ALU operation
//!   operand count
//! ```

use crate::common::constants::{
    ALU_FLAG_SHIFT, OPERAND_COUNT_SHIFT, OPERATION_ID_MASK, SETS_PC_SHIFT,
};

/// Trait for extracting instruction fields from an encoded opcode byte.
pub trait InstructionBits {
    /// Extracts the operand count (bits 7-6), 0 to 2 for defined opcodes.
    fn operand_count(&self) -> u8;

    /// Returns `true` if bit 5 marks the opcode as an ALU operation.
    fn is_alu(&self) -> bool;

    /// Returns `true` if bit 4 marks the opcode as setting the PC itself.
    fn sets_pc(&self) -> bool;

    /// Extracts the operation identifier (bits 3-0).
    fn operation_id(&self) -> u8;

    /// Total instruction length in bytes, opcode included.
    fn instruction_len(&self) -> u8 {
        self.operand_count() + 1
    }
}

impl InstructionBits for u8 {
    #[inline(always)]
    fn operand_count(&self) -> u8 {
        self >> OPERAND_COUNT_SHIFT
    }

    #[inline(always)]
    fn is_alu(&self) -> bool {
        (self >> ALU_FLAG_SHIFT) & 1 == 1
    }

    #[inline(always)]
    fn sets_pc(&self) -> bool {
        (self >> SETS_PC_SHIFT) & 1 == 1
    }

    #[inline(always)]
    fn operation_id(&self) -> u8 {
        self & OPERATION_ID_MASK
    }
}

/// A fetched instruction: the opcode byte and the two bytes following it.
///
/// Both operand bytes are always fetched; instructions with fewer operands
/// simply ignore them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fetched {
    /// Address the opcode was read from.
    pub pc: u8,
    /// Instruction register contents.
    pub opcode: u8,
    /// Byte at `pc + 1`.
    pub operand_a: u8,
    /// Byte at `pc + 2`.
    pub operand_b: u8,
}

impl Fetched {
    /// Address of the next sequential instruction, wrapping at the top of memory.
    #[inline]
    pub fn fallthrough(&self) -> u8 {
        self.pc.wrapping_add(self.opcode.instruction_len())
    }
}
