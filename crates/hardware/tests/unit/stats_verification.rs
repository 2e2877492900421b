//! Statistics classification tests.

use ls8_core::core::cpu::{Executed, Flow, Retired};
use ls8_core::isa::{AluOp, ControlOp, Fetched};
use ls8_core::stats::SimStats;
use rstest::rstest;

fn retired(executed: Executed, flow: Flow) -> Retired {
    Retired {
        inst: Fetched::default(),
        executed,
        flow,
    }
}

#[test]
fn starts_empty() {
    let stats = SimStats::default();
    assert_eq!(stats.instructions_retired, 0);
    assert_eq!(stats.branches_taken, 0);
}

#[rstest]
#[case(Executed::Alu(AluOp::Add), |s: &SimStats| s.inst_alu)]
#[case(Executed::Alu(AluOp::Cmp), |s: &SimStats| s.inst_alu)]
#[case(Executed::Control(ControlOp::Ldi), |s: &SimStats| s.inst_load)]
#[case(Executed::Control(ControlOp::Push), |s: &SimStats| s.inst_stack)]
#[case(Executed::Control(ControlOp::Pop), |s: &SimStats| s.inst_stack)]
#[case(Executed::Control(ControlOp::Jeq), |s: &SimStats| s.inst_branch)]
#[case(Executed::Control(ControlOp::Ret), |s: &SimStats| s.inst_branch)]
#[case(Executed::Control(ControlOp::Prn), |s: &SimStats| s.inst_io)]
#[case(Executed::Control(ControlOp::Hlt), |s: &SimStats| s.inst_system)]
#[case(Executed::Skipped, |s: &SimStats| s.inst_skipped)]
fn classifies_by_category(#[case] executed: Executed, #[case] counter: fn(&SimStats) -> u64) {
    let mut stats = SimStats::default();
    stats.record(&retired(executed, Flow::Next));
    assert_eq!(stats.instructions_retired, 1);
    assert_eq!(counter(&stats), 1);
}

#[test]
fn only_jumps_count_as_taken() {
    let mut stats = SimStats::default();
    stats.record(&retired(Executed::Control(ControlOp::Jne), Flow::Next));
    stats.record(&retired(Executed::Control(ControlOp::Jne), Flow::Jump(0x20)));
    stats.record(&retired(Executed::Control(ControlOp::Call), Flow::Jump(0x30)));
    assert_eq!(stats.inst_branch, 3);
    assert_eq!(stats.branches_taken, 2);
}

#[test]
fn report_lists_instruction_mix() {
    let mut stats = SimStats::default();
    stats.record(&retired(Executed::Control(ControlOp::Ldi), Flow::Next));
    stats.record(&retired(Executed::Control(ControlOp::Hlt), Flow::Next));
    let report = stats.report();
    assert!(report.contains("LS-8 EMULATION STATISTICS"));
    assert!(report.contains("sim_insts                2"));
    assert!(report.contains("load"));
    assert!(report.contains("1 (50.00%)"));
}
