//! Control-flow tests: JMP, JEQ, JNE, CALL and RET.

use ls8_core::core::arch::Flags;
use ls8_core::core::cpu::Flow;
use ls8_core::isa::opcodes::{ADD, JEQ, JNE, MUL};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::{ProgramBuilder, TestContext};

/// Address of the taken-branch block in [`branch_program`].
const TAKEN: u8 = 18;

/// Compares `a` with `b`, then branches with `jump` to `TAKEN`. R3 ends up 1 on
/// fall-through and 2 when the branch was taken.
fn branch_program(jump: u8, a: u8, b: u8) -> Vec<u8> {
    let builder = ProgramBuilder::new()
        .ldi(0, a)
        .ldi(1, b)
        .ldi(2, TAKEN)
        .cmp(0, 1);
    let builder = match jump {
        JEQ => builder.jeq(2),
        JNE => builder.jne(2),
        other => panic!("not a conditional jump: {other:#04x}"),
    };
    let builder = builder.ldi(3, 1).hlt();
    assert_eq!(builder.addr(), TAKEN);
    builder.ldi(3, 2).hlt().build()
}

#[rstest]
#[case(JEQ, 5, 5, 2)]
#[case(JEQ, 5, 6, 1)]
#[case(JEQ, 6, 5, 1)]
#[case(JNE, 5, 5, 1)]
#[case(JNE, 5, 6, 2)]
#[case(JNE, 6, 5, 2)]
fn conditional_jumps(#[case] jump: u8, #[case] a: u8, #[case] b: u8, #[case] marker: u8) {
    let mut tc = TestContext::new().load_program(&branch_program(jump, a, b));
    tc.run().unwrap();
    assert_eq!(tc.get_reg(3), marker);
}

#[test]
fn untaken_branch_advances_two_bytes() {
    let mut tc = TestContext::new().load_program(&branch_program(JEQ, 1, 2));
    for _ in 0..4 {
        tc.step().unwrap();
    }
    assert_eq!(tc.cpu.pc, 12);
    let retired = tc.cpu.step().unwrap();
    assert_eq!(retired.flow, Flow::Next);
    assert_eq!(tc.cpu.pc, 14);
}

#[test]
fn jeq_before_any_cmp_falls_through() {
    let mut tc = TestContext::new();
    assert_eq!(tc.cpu.flags, Flags::CLEAR);
    let program = ProgramBuilder::new().ldi(2, 0x40).jeq(2).hlt().build();
    tc.cpu.load_program(&program).unwrap();
    tc.run().unwrap();
    assert_eq!(tc.cpu.pc, 6);
}

#[test]
fn jmp_is_unconditional() {
    let program = ProgramBuilder::new()
        .ldi(0, 7)
        .jmp(0)
        .prn(0)
        .ldi(1, 9)
        .prn(1)
        .hlt()
        .build();
    let mut tc = TestContext::new().load_program(&program);
    tc.run().unwrap();
    assert_eq!(tc.output_lines(), vec!["9"]);
}

#[test]
fn cmp_flags_survive_other_instructions() {
    let program = ProgramBuilder::new()
        .ldi(0, 3)
        .ldi(1, 3)
        .cmp(0, 1)
        .alu(ADD, 0, 1)
        .ldi(1, 0)
        .push(0)
        .pop(2)
        .prn(2)
        .hlt()
        .build();
    let mut tc = TestContext::new().load_program(&program);
    tc.run().unwrap();
    assert!(tc.cpu.flags.equal());
    assert_eq!(tc.output_lines(), vec!["6"]);
}

#[test]
fn cmp_leaves_registers_alone() {
    let program = ProgramBuilder::new().ldi(0, 9).ldi(1, 4).cmp(0, 1).hlt().build();
    let mut tc = TestContext::new().load_program(&program);
    tc.run().unwrap();
    assert_eq!((tc.get_reg(0), tc.get_reg(1)), (9, 4));
    assert!(tc.cpu.flags.greater());
    assert_eq!(tc.cpu.flags.bits(), 0b010);
}

#[test]
fn call_and_ret() {
    // 00 LDI R1,8 ; 03 CALL R1 ; 05 PRN R0 ; 07 HLT ; 08 LDI R0,99 ; 0B RET
    let program = ProgramBuilder::new()
        .ldi(1, 8)
        .call(1)
        .prn(0)
        .hlt()
        .ldi(0, 99)
        .ret()
        .build();
    let mut tc = TestContext::new().load_program(&program);

    tc.step().unwrap();
    tc.step().unwrap();
    assert_eq!(tc.cpu.pc, 8);
    assert_eq!(tc.get_reg(7), 0xF3);
    assert_eq!(tc.cpu.ram.read(0xF3), Ok(5));

    tc.run().unwrap();
    assert_eq!(tc.output_lines(), vec!["99"]);
    assert_eq!(tc.get_reg(7), 0xF4);
}

#[test]
fn nested_calls_unwind_in_order() {
    // 00 LDI R1,0x10 ; 03 LDI R2,0x16 ; 06 LDI R0,1 ; 09 CALL R1 ; 0B PRN R0 ; 0D HLT
    // 10 CALL R2 ; 12 MUL R0,R0 ; 15 RET
    // 16 LDI R0,3 ; 19 RET
    let program = ProgramBuilder::new()
        .ldi(1, 0x10)
        .ldi(2, 0x16)
        .ldi(0, 1)
        .call(1)
        .prn(0)
        .hlt()
        .raw(&[0, 0])
        .call(2)
        .alu(MUL, 0, 0)
        .ret()
        .ldi(0, 3)
        .ret()
        .build();
    let mut tc = TestContext::new().load_program(&program);
    tc.run().unwrap();
    assert_eq!(tc.output_lines(), vec!["9"]);
    assert_eq!(tc.get_reg(7), 0xF4);
}

#[test]
fn call_reads_target_before_pushing() {
    // CALL R7 jumps to the stack pointer as it was before the push.
    let mut tc = TestContext::new().load_program(&ProgramBuilder::new().call(7).build());
    tc.step().unwrap();
    assert_eq!(tc.cpu.pc, 0xF4);
    assert_eq!(tc.get_reg(7), 0xF3);
    assert_eq!(tc.cpu.ram.read(0xF3), Ok(2));
}
