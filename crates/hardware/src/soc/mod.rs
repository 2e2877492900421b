//! Machine memory.
//!
//! LS-8 has no bus or memory-mapped devices; the only system component outside the
//! core is the flat 256-byte RAM.

/// Bounds-checked main memory.
pub mod memory;

pub use memory::Ram;
