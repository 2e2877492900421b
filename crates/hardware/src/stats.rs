//! Emulation statistics collection and reporting.
//!
//! This module tracks execution metrics for a run. It provides:
//! 1. **Throughput:** Retired instructions, host time, and derived MIPS.
//! 2. **Instruction mix:** Counts by category (ALU, load, stack, branch, I/O, system).
//! 3. **Control flow:** Taken branches and skipped unknown opcodes.

use std::time::Instant;

use crate::core::cpu::{Executed, Flow, Retired};
use crate::isa::ControlOp;

/// Emulation statistics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Number of instructions executed.
    pub instructions_retired: u64,

    /// ALU instructions.
    pub inst_alu: u64,
    /// Immediate loads (`LDI`).
    pub inst_load: u64,
    /// Stack instructions (`PUSH`, `POP`).
    pub inst_stack: u64,
    /// Control-flow instructions (`CALL`, `RET`, `JMP`, `JEQ`, `JNE`).
    pub inst_branch: u64,
    /// Output instructions (`PRN`).
    pub inst_io: u64,
    /// System instructions (`HLT`).
    pub inst_system: u64,
    /// Unknown opcodes skipped in lenient mode.
    pub inst_skipped: u64,

    /// Control-flow instructions that changed the PC.
    pub branches_taken: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_stack: 0,
            inst_branch: 0,
            inst_io: 0,
            inst_system: 0,
            inst_skipped: 0,
            branches_taken: 0,
        }
    }
}

impl SimStats {
    /// Records one retired instruction.
    pub fn record(&mut self, retired: &Retired) {
        self.instructions_retired += 1;
        let counter = match retired.executed {
            Executed::Alu(_) => &mut self.inst_alu,
            Executed::Control(ControlOp::Ldi) => &mut self.inst_load,
            Executed::Control(ControlOp::Push | ControlOp::Pop) => &mut self.inst_stack,
            Executed::Control(
                ControlOp::Call | ControlOp::Ret | ControlOp::Jmp | ControlOp::Jeq | ControlOp::Jne,
            ) => &mut self.inst_branch,
            Executed::Control(ControlOp::Prn) => &mut self.inst_io,
            Executed::Control(ControlOp::Hlt) => &mut self.inst_system,
            Executed::Skipped => &mut self.inst_skipped,
        };
        *counter += 1;
        if matches!(retired.flow, Flow::Jump(_)) {
            self.branches_taken += 1;
        }
    }

    /// Formats the statistics report.
    pub fn report(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let mips = if seconds > 0.0 {
            (self.instructions_retired as f64 / seconds) / 1_000_000.0
        } else {
            0.0
        };
        let pct = |n: u64| {
            if self.instructions_retired == 0 {
                0.0
            } else {
                (n as f64 / self.instructions_retired as f64) * 100.0
            }
        };
        let mut lines = vec![
            "==========================================================".to_string(),
            "LS-8 EMULATION STATISTICS".to_string(),
            "==========================================================".to_string(),
            format!("host_seconds             {seconds:.4} s"),
            format!("sim_insts                {}", self.instructions_retired),
            format!("sim_mips                 {mips:.2}"),
            "----------------------------------------------------------".to_string(),
            "INSTRUCTION MIX".to_string(),
        ];
        for (name, n) in [
            ("alu", self.inst_alu),
            ("load", self.inst_load),
            ("stack", self.inst_stack),
            ("branch", self.inst_branch),
            ("io", self.inst_io),
            ("system", self.inst_system),
            ("skipped", self.inst_skipped),
        ] {
            lines.push(format!("  {name:<22} {n} ({:.2}%)", pct(n)));
        }
        lines.push(format!("  branches.taken         {}", self.branches_taken));
        lines.push("==========================================================".to_string());
        lines.join("\n")
    }

    /// Prints the statistics report to stderr.
    pub fn print(&self) {
        eprintln!("\n{}", self.report());
    }
}
