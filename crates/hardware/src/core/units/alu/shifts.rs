//! ALU shift operations.
//!
//! Implements logical left and right shifts of an 8-bit value. Bits shifted
//! out are discarded, so a shift amount of 8 or more always yields zero.

use crate::isa::AluOp;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op`  - The ALU operation to perform (`Shl` or `Shr`).
/// * `a`   - Value to shift.
/// * `amt` - Shift amount; any value is accepted.
///
/// # Returns
///
/// The shifted value. Returns `a` unchanged for non-shift opcodes.
pub fn execute(op: AluOp, a: u8, amt: u8) -> u8 {
    let amt = u32::from(amt);
    match op {
        AluOp::Shl => a.checked_shl(amt).unwrap_or(0),
        AluOp::Shr => a.checked_shr(amt).unwrap_or(0),
        _ => a,
    }
}
