//! Instruction Disassembler for LS-8.
//!
//! Converts an opcode byte and its operands into a human-readable mnemonic
//! string for debug tracing, program listings, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use ls8_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0b1000_0010, 0, 8), "LDI R0, 8");
//! assert_eq!(disassemble(0b1010_0000, 1, 2), "ADD R1, R2");
//! ```

use crate::common::constants::MAX_INSTRUCTION_BYTES;
use crate::isa::instruction::InstructionBits;
use crate::isa::opcodes;

/// Disassembles one instruction.
///
/// Returns a mnemonic such as `"PRN R0"`, or `".byte 0xNN"` for bytes that
/// name no instruction.
pub fn disassemble(opcode: u8, a: u8, b: u8) -> String {
    let Some(name) = opcodes::mnemonic(opcode) else {
        return format!(".byte {opcode:#04X}");
    };
    match (opcode, opcode.operand_count()) {
        (opcodes::LDI, _) => format!("{name} R{a}, {b}"),
        (_, 0) => name.to_string(),
        (_, 1) => format!("{name} R{a}"),
        _ => format!("{name} R{a}, R{b}"),
    }
}

/// A single line of a program listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingLine {
    /// Address of the instruction's opcode byte.
    pub addr: usize,
    /// The raw instruction bytes.
    pub bytes: Vec<u8>,
    /// Disassembled text.
    pub text: String,
}

/// Disassembles a whole program image starting at address 0.
///
/// Each instruction consumes `operand_count + 1` bytes; an instruction cut off
/// by the end of the image is listed with the bytes that remain and missing
/// operands shown as zero.
pub fn disassemble_program(image: &[u8]) -> Vec<ListingLine> {
    let mut lines = Vec::new();
    let mut addr = 0;
    while addr < image.len() {
        let opcode = image[addr];
        let len = if opcodes::mnemonic(opcode).is_some() {
            opcode.instruction_len() as usize
        } else {
            1
        };
        let end = (addr + len).min(image.len());
        let operand = |i: usize| image.get(addr + i).copied().unwrap_or(0);
        lines.push(ListingLine {
            addr,
            bytes: image[addr..end].to_vec(),
            text: disassemble(opcode, operand(1), operand(2)),
        });
        addr = end;
    }
    lines
}

impl std::fmt::Display for ListingLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02X}:", self.addr)?;
        for byte in &self.bytes {
            write!(f, " {byte:02X}")?;
        }
        let pad = 3 * (MAX_INSTRUCTION_BYTES - self.bytes.len().min(MAX_INSTRUCTION_BYTES));
        write!(f, "{:pad$}   {}", "", self.text)
    }
}
