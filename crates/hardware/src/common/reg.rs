//! General-Purpose Register File.
//!
//! This module provides the `RegisterFile` struct holding the eight LS-8 registers.
//! It provides:
//! 1. **Storage:** Eight 8-bit registers (`R0`-`R7`); values wrap at the byte boundary.
//! 2. **Stack Pointer:** `R7` doubles as the stack pointer and is initialized to `0xF4`.
//! 3. **Validation:** Out-of-range indices are reported as `RegisterError::InvalidRegister`.
//! 4. **Observability:** Formatting utilities for dumping register state during a trace.

use std::fmt::Write as _;

use crate::common::constants::{INITIAL_SP, NUM_REGISTERS, SP_REGISTER};
use crate::common::error::RegisterError;

/// LS-8 register file.
///
/// Register `R7` is the stack pointer; it is an ordinary register in every other respect
/// and can be read or written by any instruction that names it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u8; NUM_REGISTERS],
}

impl RegisterFile {
    /// Creates a register file with every register zeroed except the stack pointer,
    /// which starts at `0xF4`.
    pub const fn new() -> Self {
        Self::with_sp(INITIAL_SP)
    }

    /// Creates a register file whose stack pointer starts at `sp`.
    pub const fn with_sp(sp: u8) -> Self {
        let mut regs = [0; NUM_REGISTERS];
        regs[SP_REGISTER] = sp;
        Self { regs }
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    ///
    /// # Errors
    ///
    /// Returns `RegisterError::InvalidRegister` if `idx` is not in `0..8`.
    pub fn read(&self, idx: usize) -> Result<u8, RegisterError> {
        self.regs
            .get(idx)
            .copied()
            .ok_or(RegisterError::InvalidRegister(idx))
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    /// * `val` - The byte to store.
    ///
    /// # Errors
    ///
    /// Returns `RegisterError::InvalidRegister` if `idx` is not in `0..8`.
    pub fn write(&mut self, idx: usize, val: u8) -> Result<(), RegisterError> {
        let slot = self
            .regs
            .get_mut(idx)
            .ok_or(RegisterError::InvalidRegister(idx))?;
        *slot = val;
        Ok(())
    }

    /// Returns the stack pointer (`R7`).
    #[inline]
    pub const fn sp(&self) -> u8 {
        self.regs[SP_REGISTER]
    }

    /// Sets the stack pointer (`R7`).
    #[inline]
    pub fn set_sp(&mut self, val: u8) {
        self.regs[SP_REGISTER] = val;
    }

    /// Returns all eight registers in index order.
    pub const fn as_array(&self) -> &[u8; NUM_REGISTERS] {
        &self.regs
    }

    /// Formats all registers as space-separated two-digit hex values.
    pub fn dump(&self) -> String {
        let mut out = String::with_capacity(NUM_REGISTERS * 3);
        for (i, r) in self.regs.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{r:02X}");
        }
        out
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
