//! LS-8 Instruction Decoder.
//!
//! Maps opcode bytes onto the two operation families the engine routes to:
//! `AluOp` for opcodes with the ALU bit set and `ControlOp` for everything else.

use crate::isa::opcodes;

/// Arithmetic and logic operations executed by the ALU.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// `dest += src`
    Add,
    /// `dest -= src`
    Sub,
    /// `dest *= src`
    Mul,
    /// `dest /= src`
    Div,
    /// `dest %= src`
    Mod,
    /// `dest += 1`
    Inc,
    /// `dest -= 1`
    Dec,
    /// `dest &= src`
    And,
    /// `dest |= src`
    Or,
    /// `dest ^= src`
    Xor,
    /// `dest = !dest`
    Not,
    /// `dest <<= src`
    Shl,
    /// `dest >>= src`
    Shr,
    /// Compare `dest` with `src` and set the flags.
    Cmp,
}

impl AluOp {
    /// Decodes an ALU opcode byte.
    ///
    /// Returns `None` if the byte does not name an ALU operation, including
    /// bytes with the ALU bit set that have no assigned operation.
    pub const fn from_opcode(opcode: u8) -> Option<Self> {
        Some(match opcode {
            opcodes::ADD => Self::Add,
            opcodes::SUB => Self::Sub,
            opcodes::MUL => Self::Mul,
            opcodes::DIV => Self::Div,
            opcodes::MOD => Self::Mod,
            opcodes::INC => Self::Inc,
            opcodes::DEC => Self::Dec,
            opcodes::AND => Self::And,
            opcodes::OR => Self::Or,
            opcodes::XOR => Self::Xor,
            opcodes::NOT => Self::Not,
            opcodes::SHL => Self::Shl,
            opcodes::SHR => Self::Shr,
            opcodes::CMP => Self::Cmp,
            _ => return None,
        })
    }

    /// Returns `true` if the operation reads only the destination register.
    pub const fn is_unary(self) -> bool {
        matches!(self, Self::Inc | Self::Dec | Self::Not)
    }

    /// Returns the assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Mod => "MOD",
            Self::Inc => "INC",
            Self::Dec => "DEC",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Not => "NOT",
            Self::Shl => "SHL",
            Self::Shr => "SHR",
            Self::Cmp => "CMP",
        }
    }
}

/// Non-ALU operations handled through the dispatch table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlOp {
    /// Stop the machine.
    Hlt,
    /// Load an immediate into a register.
    Ldi,
    /// Print a register in decimal.
    Prn,
    /// Push a register.
    Push,
    /// Pop into a register.
    Pop,
    /// Call a subroutine.
    Call,
    /// Return from a subroutine.
    Ret,
    /// Unconditional jump.
    Jmp,
    /// Jump if equal.
    Jeq,
    /// Jump if not equal.
    Jne,
}

impl ControlOp {
    /// Decodes a non-ALU opcode byte.
    ///
    /// `IRET` is a defined opcode but has no handler, so it decodes to `None`.
    pub const fn from_opcode(opcode: u8) -> Option<Self> {
        Some(match opcode {
            opcodes::HLT => Self::Hlt,
            opcodes::LDI => Self::Ldi,
            opcodes::PRN => Self::Prn,
            opcodes::PUSH => Self::Push,
            opcodes::POP => Self::Pop,
            opcodes::CALL => Self::Call,
            opcodes::RET => Self::Ret,
            opcodes::JMP => Self::Jmp,
            opcodes::JEQ => Self::Jeq,
            opcodes::JNE => Self::Jne,
            _ => return None,
        })
    }

    /// Returns the assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Hlt => "HLT",
            Self::Ldi => "LDI",
            Self::Prn => "PRN",
            Self::Push => "PUSH",
            Self::Pop => "POP",
            Self::Call => "CALL",
            Self::Ret => "RET",
            Self::Jmp => "JMP",
            Self::Jeq => "JEQ",
            Self::Jne => "JNE",
        }
    }
}
