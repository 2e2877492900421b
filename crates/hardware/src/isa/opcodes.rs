//! LS-8 Opcodes.
//!
//! Defines the opcode byte of every LS-8 instruction. The byte layout is
//! `NN A S IIII`: operand count, ALU flag, sets-PC flag and operation identifier.

/// Halt the CPU.
pub const HLT: u8 = 0b0000_0001;

/// Return from subroutine.
pub const RET: u8 = 0b0001_0001;

/// Return from interrupt (not executed; LS-8 interrupts are not modeled).
pub const IRET: u8 = 0b0001_0011;

/// Push a register onto the stack.
pub const PUSH: u8 = 0b0100_0101;

/// Pop the top of the stack into a register.
pub const POP: u8 = 0b0100_0110;

/// Print a register as a decimal integer.
pub const PRN: u8 = 0b0100_0111;

/// Call the subroutine at the address held in a register.
pub const CALL: u8 = 0b0101_0000;

/// Jump to the address held in a register.
pub const JMP: u8 = 0b0101_0100;

/// Jump if the Equal flag is set.
pub const JEQ: u8 = 0b0101_0101;

/// Jump if the Equal flag is clear.
pub const JNE: u8 = 0b0101_0110;

/// Increment a register.
pub const INC: u8 = 0b0110_0101;

/// Decrement a register.
pub const DEC: u8 = 0b0110_0110;

/// Bitwise complement of a register.
pub const NOT: u8 = 0b0110_1001;

/// Load an immediate value into a register.
pub const LDI: u8 = 0b1000_0010;

/// Add two registers.
pub const ADD: u8 = 0b1010_0000;

/// Subtract two registers.
pub const SUB: u8 = 0b1010_0001;

/// Multiply two registers.
pub const MUL: u8 = 0b1010_0010;

/// Divide two registers.
pub const DIV: u8 = 0b1010_0011;

/// Remainder of two registers.
pub const MOD: u8 = 0b1010_0100;

/// Compare two registers and set the flags.
pub const CMP: u8 = 0b1010_0111;

/// Bitwise AND of two registers.
pub const AND: u8 = 0b1010_1000;

/// Bitwise OR of two registers.
pub const OR: u8 = 0b1010_1010;

/// Bitwise XOR of two registers.
pub const XOR: u8 = 0b1010_1011;

/// Shift a register left.
pub const SHL: u8 = 0b1010_1100;

/// Shift a register right.
pub const SHR: u8 = 0b1010_1101;

/// Returns the assembler mnemonic for an opcode byte, if it names an instruction.
pub const fn mnemonic(opcode: u8) -> Option<&'static str> {
    Some(match opcode {
        HLT => "HLT",
        RET => "RET",
        IRET => "IRET",
        PUSH => "PUSH",
        POP => "POP",
        PRN => "PRN",
        CALL => "CALL",
        JMP => "JMP",
        JEQ => "JEQ",
        JNE => "JNE",
        INC => "INC",
        DEC => "DEC",
        NOT => "NOT",
        LDI => "LDI",
        ADD => "ADD",
        SUB => "SUB",
        MUL => "MUL",
        DIV => "DIV",
        MOD => "MOD",
        CMP => "CMP",
        AND => "AND",
        OR => "OR",
        XOR => "XOR",
        SHL => "SHL",
        SHR => "SHR",
        _ => return None,
    })
}
