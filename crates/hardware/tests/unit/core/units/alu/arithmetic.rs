//! ALU arithmetic operation tests.
//!
//! Boundary values for every arithmetic operation: zero, one, the byte maximum,
//! and the points where results wrap.

use ls8_core::common::error::AluError;
use ls8_core::core::units::alu::Alu;
use ls8_core::isa::AluOp;
use rstest::rstest;

use super::value;

// ─── ADD / SUB / MUL ─────────────────────────────────────────────────────────

#[rstest]
#[case(0, 0, 0)]
#[case(1, 2, 3)]
#[case(0xFF, 1, 0)]
#[case(200, 100, 44)]
#[case(0x80, 0x80, 0)]
fn add(#[case] a: u8, #[case] b: u8, #[case] expected: u8) {
    assert_eq!(value(AluOp::Add, a, b), expected);
}

#[rstest]
#[case(3, 2, 1)]
#[case(0, 1, 0xFF)]
#[case(1, 0xFF, 2)]
#[case(0x80, 0x80, 0)]
fn sub(#[case] a: u8, #[case] b: u8, #[case] expected: u8) {
    assert_eq!(value(AluOp::Sub, a, b), expected);
}

#[rstest]
#[case(8, 9, 72)]
#[case(0xFF, 0, 0)]
#[case(16, 16, 0)]
#[case(0xFF, 0xFF, 1)]
#[case(20, 13, 4)]
fn mul(#[case] a: u8, #[case] b: u8, #[case] expected: u8) {
    assert_eq!(value(AluOp::Mul, a, b), expected);
}

// ─── DIV / MOD ───────────────────────────────────────────────────────────────

#[rstest]
#[case(72, 9, 8)]
#[case(7, 2, 3)]
#[case(0, 5, 0)]
#[case(0xFF, 1, 0xFF)]
#[case(1, 0xFF, 0)]
fn div(#[case] a: u8, #[case] b: u8, #[case] expected: u8) {
    assert_eq!(value(AluOp::Div, a, b), expected);
}

#[rstest]
#[case(7, 2, 1)]
#[case(72, 9, 0)]
#[case(5, 0xFF, 5)]
#[case(0xFF, 16, 15)]
fn rem(#[case] a: u8, #[case] b: u8, #[case] expected: u8) {
    assert_eq!(value(AluOp::Mod, a, b), expected);
}

#[rstest]
#[case(AluOp::Div, "DIV")]
#[case(AluOp::Mod, "MOD")]
fn zero_divisor_is_an_error(#[case] op: AluOp, #[case] mnemonic: &'static str) {
    for a in [0, 1, 0xFF] {
        assert_eq!(
            Alu::execute(op, a, 0),
            Err(AluError::DivideByZero { mnemonic })
        );
    }
}

// ─── INC / DEC ───────────────────────────────────────────────────────────────

#[test]
fn inc_wraps_at_top() {
    assert_eq!(value(AluOp::Inc, 0, 0), 1);
    assert_eq!(value(AluOp::Inc, 0xFE, 0), 0xFF);
    assert_eq!(value(AluOp::Inc, 0xFF, 0), 0);
}

#[test]
fn dec_wraps_at_bottom() {
    assert_eq!(value(AluOp::Dec, 1, 0), 0);
    assert_eq!(value(AluOp::Dec, 0, 0), 0xFF);
}

#[test]
fn unary_ops_ignore_source() {
    assert_eq!(value(AluOp::Inc, 5, 0xFF), 6);
    assert_eq!(value(AluOp::Dec, 5, 0xFF), 4);
}
