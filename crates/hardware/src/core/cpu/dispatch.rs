//! Opcode Dispatch Table.
//!
//! Maps every non-ALU opcode byte to its `ControlOp` handler variant. The table
//! is built at compile time, so lookup is a single array index. Handlers mutate
//! the CPU and report whether they took over the program counter.

use std::io::Write;

use super::Cpu;
use super::execution::Flow;
use crate::common::error::Fault;
use crate::isa::{ControlOp, Fetched};

/// Number of distinct opcode bytes.
const OPCODE_SPACE: usize = 256;

/// Builds the opcode to handler table.
const fn build_table() -> [Option<ControlOp>; OPCODE_SPACE] {
    let mut table = [None; OPCODE_SPACE];
    let mut opcode = 0;
    while opcode < OPCODE_SPACE {
        table[opcode] = ControlOp::from_opcode(opcode as u8);
        opcode += 1;
    }
    table
}

/// Opcode byte to handler variant, `None` where no handler exists.
pub static DISPATCH_TABLE: [Option<ControlOp>; OPCODE_SPACE] = build_table();

/// Looks up the handler for a non-ALU opcode.
#[inline]
pub fn lookup(opcode: u8) -> Option<ControlOp> {
    DISPATCH_TABLE[opcode as usize]
}

impl<W: Write> Cpu<W> {
    /// Executes a non-ALU instruction.
    ///
    /// # Arguments
    ///
    /// * `op`   - The handler selected from the dispatch table.
    /// * `inst` - The fetched instruction; `operand_a` is a register index for every
    ///   handler that takes operands, `operand_b` is `LDI`'s immediate.
    ///
    /// # Returns
    ///
    /// `Flow::Jump` if the handler set the PC, `Flow::Next` otherwise.
    ///
    /// # Errors
    ///
    /// * `Fault::Register` - `operand_a` is not a register index.
    /// * `Fault::Memory` - a stack access left memory.
    /// * `Fault::Output` - `PRN` could not write.
    pub fn dispatch(&mut self, op: ControlOp, inst: &Fetched) -> Result<Flow, Fault> {
        let reg = usize::from(inst.operand_a);
        match op {
            ControlOp::Hlt => {
                self.running = false;
            }
            ControlOp::Ldi => {
                self.regs.write(reg, inst.operand_b)?;
            }
            ControlOp::Prn => {
                let value = self.regs.read(reg)?;
                self.emit(value)?;
            }
            ControlOp::Push => {
                let value = self.regs.read(reg)?;
                self.push(value)?;
            }
            ControlOp::Pop => {
                let value = self.pop()?;
                self.regs.write(reg, value)?;
            }
            ControlOp::Call => {
                let target = self.regs.read(reg)?;
                self.push(inst.fallthrough())?;
                return Ok(Flow::Jump(target));
            }
            ControlOp::Ret => {
                return Ok(Flow::Jump(self.pop()?));
            }
            ControlOp::Jmp => {
                return Ok(Flow::Jump(self.regs.read(reg)?));
            }
            ControlOp::Jeq => {
                if self.flags.equal() {
                    return Ok(Flow::Jump(self.regs.read(reg)?));
                }
            }
            ControlOp::Jne => {
                if !self.flags.equal() {
                    return Ok(Flow::Jump(self.regs.read(reg)?));
                }
            }
        }
        Ok(Flow::Next)
    }

    /// Decrements SP and stores `value` at the new top of stack.
    ///
    /// SP wraps from `0x00` to `0xFF`.
    ///
    /// # Errors
    ///
    /// Returns `Fault::Memory` if the store fails.
    pub fn push(&mut self, value: u8) -> Result<(), Fault> {
        let sp = self.regs.sp().wrapping_sub(1);
        self.regs.set_sp(sp);
        self.ram.write(sp as usize, value)?;
        Ok(())
    }

    /// Reads the top of stack and increments SP.
    ///
    /// SP wraps from `0xFF` to `0x00`.
    ///
    /// # Errors
    ///
    /// Returns `Fault::Memory` if the load fails.
    pub fn pop(&mut self) -> Result<u8, Fault> {
        let sp = self.regs.sp();
        let value = self.ram.read(sp as usize)?;
        self.regs.set_sp(sp.wrapping_add(1));
        Ok(value)
    }
}
