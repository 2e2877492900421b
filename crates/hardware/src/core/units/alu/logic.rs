//! ALU bitwise logical operations.
//!
//! Implements AND, OR, XOR and NOT. `NOT` is a true in-place complement of
//! the destination value.

use crate::isa::AluOp;

/// Executes a bitwise logical operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a logical variant).
/// * `a`  - Destination register value.
/// * `b`  - Source register value (ignored by `Not`).
///
/// # Returns
///
/// The 8-bit result. Returns `a` unchanged for non-logical opcodes.
pub const fn execute(op: AluOp, a: u8, b: u8) -> u8 {
    match op {
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Xor => a ^ b,
        AluOp::Not => !a,
        _ => a,
    }
}
