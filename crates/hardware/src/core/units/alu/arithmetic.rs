//! ALU arithmetic operations.
//!
//! Implements addition, subtraction, multiplication, division, remainder,
//! increment and decrement over 8-bit values. Every result wraps modulo 256;
//! division and remainder are unsigned integer operations.

use crate::common::error::AluError;
use crate::isa::AluOp;

/// Executes an arithmetic operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be an arithmetic variant).
/// * `a`  - Destination register value.
/// * `b`  - Source register value (ignored by `Inc` and `Dec`).
///
/// # Errors
///
/// Returns `AluError::DivideByZero` for `Div` or `Mod` when `b == 0`.
///
/// # Returns
///
/// The wrapped 8-bit result. Returns `a` unchanged for non-arithmetic opcodes.
pub fn execute(op: AluOp, a: u8, b: u8) -> Result<u8, AluError> {
    Ok(match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        AluOp::Mul => a.wrapping_mul(b),
        AluOp::Div => a.checked_div(b).ok_or(AluError::DivideByZero {
            mnemonic: op.mnemonic(),
        })?,
        AluOp::Mod => a.checked_rem(b).ok_or(AluError::DivideByZero {
            mnemonic: op.mnemonic(),
        })?,
        AluOp::Inc => a.wrapping_add(1),
        AluOp::Dec => a.wrapping_sub(1),
        _ => a,
    })
}
