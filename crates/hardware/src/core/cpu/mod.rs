//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which owns the entire machine state.
//! It coordinates the following:
//! 1. **State Management:** Registers, program counter, flags and the running flag.
//! 2. **Memory:** The 256-byte RAM the program is loaded into and the stack lives in.
//! 3. **Output:** The sink `PRN` writes to (stdout by default, any `Write` in tests).
//! 4. **Observability:** Trace lines and state dumps for debugging.

/// Opcode dispatch table and non-ALU instruction handlers.
pub mod dispatch;

/// Fetch-decode-execute loop and ALU routing.
pub mod execution;

use std::io::{self, Stdout, Write};

use crate::common::RegisterFile;
use crate::common::error::Fault;
use crate::config::Config;
use crate::core::arch::Flags;
use crate::soc::Ram;

pub use self::execution::{Executed, Flow, Retired};

/// Main CPU structure containing all machine state.
///
/// One `Cpu` models one LS-8 machine for the lifetime of one program run. The
/// output sink `W` receives everything `PRN` prints.
#[derive(Debug)]
pub struct Cpu<W: Write = Stdout> {
    /// General-purpose registers; `R7` is the stack pointer.
    pub regs: RegisterFile,
    /// Main memory.
    pub ram: Ram,
    /// Program Counter.
    pub pc: u8,
    /// Condition flags set by `CMP`.
    pub flags: Flags,
    /// Cleared by `HLT`; the run loop exits when this is `false`.
    pub running: bool,
    /// Print a trace line to stderr before each instruction.
    pub trace: bool,
    /// Fault on unknown non-ALU opcodes instead of skipping them.
    pub strict_opcodes: bool,
    out: W,
}

impl Cpu<Stdout> {
    /// Creates a CPU that prints to standard output.
    ///
    /// # Arguments
    ///
    /// * `config` - Run configuration (trace, opcode policy, initial SP).
    pub fn new(config: &Config) -> Self {
        Self::with_output(config, io::stdout())
    }
}

impl<W: Write> Cpu<W> {
    /// Creates a CPU that prints to `out`.
    ///
    /// Memory is zero-filled, every register is zero except the stack pointer, the
    /// PC is 0, flags are clear and the machine is running.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::{Config, Cpu};
    ///
    /// let cpu = Cpu::with_output(&Config::default(), Vec::new());
    /// assert_eq!(cpu.pc, 0);
    /// assert_eq!(cpu.regs.sp(), 0xF4);
    /// assert!(cpu.running);
    /// ```
    pub fn with_output(config: &Config, out: W) -> Self {
        Self {
            regs: RegisterFile::with_sp(config.general.initial_sp),
            ram: Ram::new(),
            pc: 0,
            flags: Flags::CLEAR,
            running: true,
            trace: config.general.trace_instructions,
            strict_opcodes: config.general.strict_opcodes,
            out,
        }
    }

    /// Copies a program image into memory starting at address 0.
    ///
    /// # Errors
    ///
    /// Returns `Fault::Memory` if the image is larger than memory.
    pub fn load_program(&mut self, image: &[u8]) -> Result<(), Fault> {
        self.ram.load(0, image)?;
        Ok(())
    }

    /// Returns the output sink.
    pub const fn output(&self) -> &W {
        &self.out
    }

    /// Consumes the CPU and returns the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Flushes the output sink.
    ///
    /// # Errors
    ///
    /// Returns `Fault::Output` if the sink fails to flush.
    pub fn flush(&mut self) -> Result<(), Fault> {
        self.out.flush().map_err(|e| Fault::Output(e.kind()))
    }

    /// Writes one line of program output.
    pub(crate) fn emit(&mut self, value: u8) -> Result<(), Fault> {
        writeln!(self.out, "{value}").map_err(|e| Fault::Output(e.kind()))
    }

    /// Formats the machine state as a single trace line.
    ///
    /// The layout is `TRACE: PC | FL | IR A B | R0 .. R7`, all two-digit hex.
    /// Bytes past the end of memory are shown as `00`.
    pub fn trace_line(&self) -> String {
        let peek = |offset: usize| self.ram.read(self.pc as usize + offset).unwrap_or(0);
        format!(
            "TRACE: {:02X} | {:02X} | {:02X} {:02X} {:02X} | {}",
            self.pc,
            self.flags.bits(),
            peek(0),
            peek(1),
            peek(2),
            self.regs.dump()
        )
    }

    /// Dumps the CPU state to stderr.
    pub fn dump_state(&self) {
        eprintln!(
            "PC = {:#04x}  FL = {:#05b}  SP = {:#04x}",
            self.pc,
            self.flags.bits(),
            self.regs.sp()
        );
        eprintln!("R0-R7: {}", self.regs.dump());
    }
}
