//! CPU tests, driven through whole programs where possible.

/// Conditional and unconditional jumps, subroutine calls.
pub mod control_flow;
