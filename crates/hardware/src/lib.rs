//! LS-8 emulator library.
//!
//! This crate implements an emulator for the LS-8, an 8-bit teaching architecture, with the following:
//! 1. **Core:** Register file, flags, ALU, opcode dispatch table and the fetch-decode-execute loop.
//! 2. **Memory:** A bounds-checked 256-byte RAM holding both the program and the stack.
//! 3. **ISA:** Opcode definitions, bit-field decoding and a disassembler.
//! 4. **Simulation:** Program image loader, configuration, and statistics collection.
//!
//! ```
//! use ls8_core::{Config, Simulator};
//! use ls8_core::sim::loader::parse_program;
//!
//! let image = parse_program("10000010\n00000000\n00001000\n01000111\n00000000\n00000001\n").unwrap();
//! let mut sim = Simulator::with_output(&Config::default(), Vec::new());
//! sim.load(&image).unwrap();
//! sim.run().unwrap();
//! assert_eq!(sim.cpu.output(), b"8\n");
//! ```

/// Common types and constants (registers, errors, exit statuses).
pub mod common;
/// Emulator configuration (defaults, JSON deserialization).
pub mod config;
/// CPU core (flags, ALU, dispatch, execution).
pub mod core;
/// Instruction set (opcodes, decode, disassembly).
pub mod isa;
/// Program loader and run driver.
pub mod sim;
/// Main memory.
pub mod soc;
/// Emulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, memory, flags and the output sink.
pub use crate::core::Cpu;
/// Run driver; owns a CPU and its statistics.
pub use crate::sim::Simulator;
