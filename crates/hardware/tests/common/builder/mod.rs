
pub use instruction::ProgramBuilder;
