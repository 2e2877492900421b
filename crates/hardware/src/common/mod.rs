//! Common utilities and types used throughout the LS-8 emulator.
//!
//! This module provides fundamental building blocks shared across all components
//! of the emulator. It includes:
//! 1. **Constants:** Memory size, register layout and opcode field positions.
//! 2. **Error Handling:** Faults, load errors and their exit statuses.
//! 3. **Register Management:** The eight-entry register file with the stack pointer in `R7`.

/// Common constants used throughout the emulator.
pub mod constants;

/// Error types and fault definitions.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{INITIAL_SP, MEMORY_SIZE, NUM_REGISTERS, SP_REGISTER};
pub use error::{AluError, Fault, LoadError, MemoryError, RegisterError, SimError};
pub use reg::RegisterFile;
