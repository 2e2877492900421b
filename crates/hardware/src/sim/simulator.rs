//! Simulator: owns the CPU and the statistics side-by-side.
//!
//! The CPU only knows how to execute instructions; the simulator drives it to
//! completion, records every retired instruction and logs how the run ended.

use std::io::{Stdout, Write};
use std::path::Path;

use crate::common::error::{Fault, SimError};
use crate::config::Config;
use crate::core::Cpu;
use crate::sim::loader;
use crate::stats::SimStats;

/// Top-level simulator: CPU state + statistics.
#[derive(Debug)]
pub struct Simulator<W: Write = Stdout> {
    /// CPU architectural state (registers, memory, flags, output).
    pub cpu: Cpu<W>,
    /// Run statistics.
    pub stats: SimStats,
}

impl Simulator<Stdout> {
    /// Creates a simulator printing to standard output.
    pub fn new(config: &Config) -> Self {
        Self::from_cpu(Cpu::new(config))
    }
}

impl<W: Write> Simulator<W> {
    /// Creates a simulator printing to `out`.
    pub fn with_output(config: &Config, out: W) -> Self {
        Self::from_cpu(Cpu::with_output(config, out))
    }

    /// Wraps an existing CPU.
    pub fn from_cpu(cpu: Cpu<W>) -> Self {
        tracing::debug!(
            trace = cpu.trace,
            strict_opcodes = cpu.strict_opcodes,
            sp = cpu.regs.sp(),
            "simulator constructed"
        );
        Self {
            cpu,
            stats: SimStats::default(),
        }
    }

    /// Loads a program image from bytes.
    ///
    /// # Errors
    ///
    /// Returns `Fault::Memory` if the image is larger than memory.
    pub fn load(&mut self, image: &[u8]) -> Result<(), Fault> {
        self.cpu.load_program(image)
    }

    /// Loads a program image file.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Load` if the file is missing or malformed.
    pub fn load_file(&mut self, path: &Path) -> Result<usize, SimError> {
        loader::load_into(&mut self.cpu, path)
    }

    /// Advances the machine by one instruction.
    ///
    /// # Errors
    ///
    /// Returns the `Fault` raised by the instruction.
    pub fn tick(&mut self) -> Result<(), Fault> {
        let retired = self.cpu.step()?;
        self.stats.record(&retired);
        Ok(())
    }

    /// Runs until the program halts.
    ///
    /// # Errors
    ///
    /// Returns the first `Fault` raised. The CPU is left in the faulting state
    /// so it can be inspected with [`Cpu::dump_state`].
    pub fn run(&mut self) -> Result<(), Fault> {
        while self.cpu.running {
            if let Err(fault) = self.tick() {
                tracing::error!(pc = self.cpu.pc, %fault, "machine fault");
                let _ = self.cpu.flush();
                return Err(fault);
            }
        }
        self.cpu.flush()?;
        tracing::info!(
            instructions = self.stats.instructions_retired,
            "machine halted"
        );
        Ok(())
    }

    /// Returns `true` once `HLT` has executed.
    pub const fn halted(&self) -> bool {
        !self.cpu.running
    }
}
