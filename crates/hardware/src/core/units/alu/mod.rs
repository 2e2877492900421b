//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the LS-8 ALU. It is pure: it takes the destination
//! and source register values and returns what the CPU should do with them,
//! leaving register and flag updates to the caller.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mul, Div, Mod, Inc, Dec
//! - [`logic`]:      And, Or, Xor, Not
//! - [`shifts`]:     Shl, Shr
//!
//! `Cmp` is handled here directly since it produces flags, not a value.

/// Integer arithmetic operations (add, subtract, multiply, divide).
pub mod arithmetic;

/// Bitwise logical operations (and, or, xor, not).
pub mod logic;

/// Shift operations (shl, shr).
pub mod shifts;

use crate::common::error::AluError;
use crate::core::arch::Flags;
use crate::isa::AluOp;

/// Result of an ALU operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOutput {
    /// Store the value in the destination register.
    Value(u8),
    /// Replace the flags register; no register changes.
    Flags(Flags),
}

/// Arithmetic Logic Unit (ALU) for 8-bit operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform.
    /// * `a`  - Destination register value.
    /// * `b`  - Source register value; ignored by unary operations.
    ///
    /// # Errors
    ///
    /// Returns `AluError::DivideByZero` for `Div`/`Mod` with `b == 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::core::units::alu::{Alu, AluOutput};
    /// use ls8_core::isa::AluOp;
    ///
    /// // Addition wraps at 256
    /// assert_eq!(Alu::execute(AluOp::Add, 200, 100), Ok(AluOutput::Value(44)));
    ///
    /// // Complement of the destination
    /// assert_eq!(Alu::execute(AluOp::Not, 0b1010_1010, 0), Ok(AluOutput::Value(0b0101_0101)));
    ///
    /// // Division by zero is an error, never a value
    /// assert!(Alu::execute(AluOp::Div, 10, 0).is_err());
    /// ```
    pub fn execute(op: AluOp, a: u8, b: u8) -> Result<AluOutput, AluError> {
        let value = match op {
            AluOp::Add
            | AluOp::Sub
            | AluOp::Mul
            | AluOp::Div
            | AluOp::Mod
            | AluOp::Inc
            | AluOp::Dec => arithmetic::execute(op, a, b)?,

            AluOp::And | AluOp::Or | AluOp::Xor | AluOp::Not => logic::execute(op, a, b),

            AluOp::Shl | AluOp::Shr => shifts::execute(op, a, b),

            AluOp::Cmp => return Ok(AluOutput::Flags(Flags::from_ordering(a.cmp(&b)))),
        };
        Ok(AluOutput::Value(value))
    }
}
