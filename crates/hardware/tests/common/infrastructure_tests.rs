use super::builder::instruction::ProgramBuilder;
use super::harness::TestContext;
use ls8_core::isa::opcodes::*;

// ─── ProgramBuilder: encoding ───────────────────────────────────────────────

#[test]
fn builder_emits_opcode_then_operands() {
    let program = ProgramBuilder::new().ldi(3, 0x7F).build();
    assert_eq!(program, vec![LDI, 3, 0x7F]);
}

#[test]
fn builder_lengths_match_operand_count() {
    assert_eq!(ProgramBuilder::new().hlt().build().len(), 1);
    assert_eq!(ProgramBuilder::new().prn(0).build().len(), 2);
    assert_eq!(ProgramBuilder::new().alu(ADD, 0, 1).build().len(), 3);
}

#[test]
fn builder_addr_tracks_position() {
    let builder = ProgramBuilder::new().ldi(0, 1).push(0);
    assert_eq!(builder.addr(), 5);
    let builder = builder.raw(&[0xAA, 0xBB]);
    assert_eq!(builder.addr(), 7);
}

// ─── TestContext ────────────────────────────────────────────────────────────

#[test]
fn context_starts_at_reset_state() {
    let tc = TestContext::new();
    assert_eq!(tc.cpu.pc, 0);
    assert_eq!(tc.get_reg(7), 0xF4);
    assert!(tc.cpu.running);
    assert!(tc.output_lines().is_empty());
}

#[test]
fn context_register_helpers() {
    let mut tc = TestContext::new();
    tc.set_reg(4, 0x33);
    assert_eq!(tc.get_reg(4), 0x33);
}

#[test]
#[should_panic(expected = "did not halt")]
fn context_run_is_bounded() {
    // JMP R0 with R0 = 0 loops forever.
    let mut tc = TestContext::new().load_program(&ProgramBuilder::new().jmp(0).build());
    let _ = tc.run();
}
