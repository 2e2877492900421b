//! Fault and Error definitions.
//!
//! This module defines the error handling for the emulator. It provides:
//! 1. **Component Errors:** Memory bounds, register index and ALU failures.
//! 2. **Faults:** Every error that can stop a running program, wrapping the component errors.
//! 3. **Load Errors:** Failures while reading and parsing a program image.
//! 4. **Exit Status:** A distinct process exit status per error category.
//!
//! LS-8 has no trap mechanism, so every error here is fatal to the run.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::common::constants::MEMORY_SIZE;

/// Exit status for a malformed command line.
pub const EXIT_USAGE: i32 = 1;
/// Exit status for a program file that does not exist.
pub const EXIT_FILE_NOT_FOUND: i32 = 2;
/// Exit status for any other program load failure.
pub const EXIT_LOAD: i32 = 3;
/// Exit status for an out-of-bounds memory access.
pub const EXIT_MEMORY: i32 = 4;
/// Exit status for an invalid register index.
pub const EXIT_REGISTER: i32 = 5;
/// Exit status for an ALU failure.
pub const EXIT_ALU: i32 = 6;
/// Exit status for an illegal instruction.
pub const EXIT_ILLEGAL_INSTRUCTION: i32 = 7;
/// Exit status for a failure writing program output.
pub const EXIT_OUTPUT: i32 = 8;

/// Memory access failure.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum MemoryError {
    /// The address lies outside `[0, MEMORY_SIZE)`.
    #[error("memory access out of bounds: {0:#06x} (size {size:#x})", size = MEMORY_SIZE)]
    OutOfBounds(usize),
}

/// Register file access failure.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum RegisterError {
    /// The index does not name one of `R0`-`R7`.
    #[error("invalid register index: {0}")]
    InvalidRegister(usize),
}

/// Arithmetic logic unit failure.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum AluError {
    /// `DIV` or `MOD` with a zero divisor.
    #[error("division by zero in {mnemonic}")]
    DivideByZero {
        /// Mnemonic of the failing operation.
        mnemonic: &'static str,
    },

    /// The opcode has the ALU bit set but names no ALU operation.
    #[error("unsupported ALU operation: {0:#04x}")]
    UnsupportedOperation(u8),
}

/// An unrecoverable execution error raised while the CPU is running.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Fault {
    /// Memory bounds violation.
    #[error(transparent)]
    Memory(#[from] MemoryError),

    /// Register index violation.
    #[error(transparent)]
    Register(#[from] RegisterError),

    /// ALU failure.
    #[error(transparent)]
    Alu(#[from] AluError),

    /// A non-ALU opcode that is not in the dispatch table.
    #[error("illegal instruction {opcode:#04x} at pc {pc:#04x}")]
    IllegalInstruction {
        /// The undecodable opcode byte.
        opcode: u8,
        /// Address the opcode was fetched from.
        pc: u8,
    },

    /// `PRN` could not write to the output stream.
    #[error("failed to write program output: {0}")]
    Output(io::ErrorKind),
}

impl Fault {
    /// Returns the process exit status for this fault category.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Memory(_) => EXIT_MEMORY,
            Self::Register(_) => EXIT_REGISTER,
            Self::Alu(_) => EXIT_ALU,
            Self::IllegalInstruction { .. } => EXIT_ILLEGAL_INSTRUCTION,
            Self::Output(_) => EXIT_OUTPUT,
        }
    }
}

/// Program image load failure.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file does not exist.
    #[error("{} file not found", .0.display())]
    FileNotFound(PathBuf),

    /// The program file exists but could not be read.
    #[error("could not read '{}': {source}", path.display())]
    Io {
        /// Path of the program file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A non-empty line is not an 8-bit binary literal.
    #[error("line {line}: '{text}' is not an 8-bit binary literal")]
    Malformed {
        /// 1-based line number in the image.
        line: usize,
        /// The offending text with comments and whitespace removed.
        text: String,
    },

    /// The image holds more bytes than memory can.
    #[error("program does not fit in memory: byte {index} on line {line} exceeds {size} bytes", size = MEMORY_SIZE)]
    ProgramTooLarge {
        /// Zero-based index of the first byte that does not fit.
        index: usize,
        /// 1-based line number holding that byte.
        line: usize,
    },
}

impl LoadError {
    /// Classifies an I/O failure on `path`, separating a missing file from other errors.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::FileNotFound(path.to_path_buf())
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    /// Returns the process exit status for this load failure.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound(_) => EXIT_FILE_NOT_FOUND,
            Self::Io { .. } | Self::Malformed { .. } | Self::ProgramTooLarge { .. } => EXIT_LOAD,
        }
    }
}

/// Any error that ends an emulator run.
#[derive(Debug, Error)]
pub enum SimError {
    /// The program could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The program faulted while running.
    #[error(transparent)]
    Fault(#[from] Fault),
}

impl SimError {
    /// Returns the process exit status for this error.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Load(e) => e.exit_code(),
            Self::Fault(f) => f.exit_code(),
        }
    }
}
