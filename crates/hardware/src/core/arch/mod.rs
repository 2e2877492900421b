//! LS-8 architecture-specific state.
//!
//! The register file lives in `common::reg`; this module holds the condition
//! flags register, the only other piece of architectural state besides the PC.

/// Condition flags register (`FL`).
pub mod flags;

pub use flags::Flags;
