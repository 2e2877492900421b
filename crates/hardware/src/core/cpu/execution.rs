//! Main Execution Loop.
//!
//! This module implements the fetch-decode-execute cycle of the CPU. It performs the following:
//! 1. **Fetch:** Reads the opcode and both operand bytes at the program counter.
//! 2. **Decode:** Splits the opcode into operand count, ALU flag and sets-PC flag.
//! 3. **Execute:** Routes ALU opcodes to the ALU and everything else through the dispatch table.
//! 4. **Advance:** Moves the PC past the instruction unless the handler jumped.

use std::io::Write;

use super::Cpu;
use super::dispatch;
use crate::common::error::{AluError, Fault};
use crate::core::units::alu::{Alu, AluOutput};
use crate::isa::disasm::disassemble;
use crate::isa::{AluOp, ControlOp, Fetched, InstructionBits};

/// How the program counter moves after an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Advance to the next sequential instruction.
    Next,
    /// The handler set the PC to this address.
    Jump(u8),
}

/// What a completed step executed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Executed {
    /// An ALU operation.
    Alu(AluOp),
    /// A dispatch-table operation.
    Control(ControlOp),
    /// An unknown non-ALU opcode skipped in lenient mode.
    Skipped,
}

/// Record of one retired instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Retired {
    /// The instruction as fetched.
    pub inst: Fetched,
    /// The operation it decoded to.
    pub executed: Executed,
    /// How the PC moved.
    pub flow: Flow,
}

impl<W: Write> Cpu<W> {
    /// Fetches the instruction at the PC.
    ///
    /// All three bytes are read even if the instruction uses fewer, so an opcode in
    /// the last two cells of memory faults.
    ///
    /// # Errors
    ///
    /// Returns `Fault::Memory` if `pc + 1` or `pc + 2` lies past the end of memory.
    pub fn fetch(&self) -> Result<Fetched, Fault> {
        let pc = self.pc as usize;
        Ok(Fetched {
            pc: self.pc,
            opcode: self.ram.read(pc)?,
            operand_a: self.ram.read(pc + 1)?,
            operand_b: self.ram.read(pc + 2)?,
        })
    }

    /// Executes one instruction.
    ///
    /// # Errors
    ///
    /// Returns the `Fault` raised by the instruction; machine state is left as it was
    /// at the point of failure and the PC still addresses the faulting instruction.
    pub fn step(&mut self) -> Result<Retired, Fault> {
        let inst = self.fetch()?;

        if self.trace {
            eprintln!("{}", self.trace_line());
        }
        tracing::trace!(
            pc = inst.pc,
            "{}",
            disassemble(inst.opcode, inst.operand_a, inst.operand_b)
        );

        let (executed, flow) = if inst.opcode.is_alu() {
            let op = self.alu(inst.opcode, inst.operand_a, inst.operand_b)?;
            (Executed::Alu(op), Flow::Next)
        } else if let Some(op) = dispatch::lookup(inst.opcode) {
            (Executed::Control(op), self.dispatch(op, &inst)?)
        } else if self.strict_opcodes {
            return Err(Fault::IllegalInstruction {
                opcode: inst.opcode,
                pc: inst.pc,
            });
        } else {
            tracing::warn!(pc = inst.pc, opcode = inst.opcode, "skipping unknown opcode");
            (Executed::Skipped, Flow::Next)
        };

        self.pc = match flow {
            Flow::Jump(target) => {
                debug_assert!(
                    inst.opcode.sets_pc(),
                    "{:#04x} jumped without the sets-PC bit",
                    inst.opcode
                );
                target
            }
            Flow::Next => inst.fallthrough(),
        };

        Ok(Retired {
            inst,
            executed,
            flow,
        })
    }

    /// Runs until `HLT` clears the running flag.
    ///
    /// Output is flushed when the machine halts.
    ///
    /// # Errors
    ///
    /// Returns the first `Fault` raised; execution stops there.
    ///
    /// # Returns
    ///
    /// The number of instructions executed, `HLT` included.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::{Config, Cpu};
    ///
    /// let mut cpu = Cpu::with_output(&Config::default(), Vec::new());
    /// // LDI R0,8 ; PRN R0 ; HLT
    /// cpu.load_program(&[0b1000_0010, 0, 8, 0b0100_0111, 0, 0b0000_0001]).unwrap();
    /// assert_eq!(cpu.run(), Ok(3));
    /// assert_eq!(cpu.output(), b"8\n");
    /// ```
    pub fn run(&mut self) -> Result<u64, Fault> {
        let mut count = 0;
        while self.running {
            let _ = self.step()?;
            count += 1;
        }
        self.flush()?;
        Ok(count)
    }

    /// Applies an ALU opcode to registers `dest` and `src`.
    ///
    /// The result of value-producing operations is written to `dest`; `CMP` updates
    /// the flags and leaves the registers alone. Unary operations never read `src`,
    /// so their unused operand byte may hold anything.
    ///
    /// # Errors
    ///
    /// * `Fault::Alu(UnsupportedOperation)` - the opcode names no ALU operation.
    /// * `Fault::Alu(DivideByZero)` - `DIV`/`MOD` with a zero divisor.
    /// * `Fault::Register` - `dest` or `src` is not a register index.
    pub fn alu(&mut self, opcode: u8, dest: u8, src: u8) -> Result<AluOp, Fault> {
        let op = AluOp::from_opcode(opcode).ok_or(AluError::UnsupportedOperation(opcode))?;
        let dest = usize::from(dest);
        let a = self.regs.read(dest)?;
        let b = if op.is_unary() {
            0
        } else {
            self.regs.read(usize::from(src))?
        };
        match Alu::execute(op, a, b)? {
            AluOutput::Value(value) => self.regs.write(dest, value)?,
            AluOutput::Flags(flags) => self.flags = flags,
        }
        Ok(op)
    }
}
