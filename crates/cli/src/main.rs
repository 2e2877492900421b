//! LS-8 emulator CLI.
//!
//! This binary loads an LS-8 program image and runs it. It performs:
//! 1. **Run:** Execute a program, printing `PRN` output on stdout.
//! 2. **Trace:** Optionally print a per-instruction state line on stderr.
//! 3. **Disassemble:** List the loaded image instead of running it.
//!
//! Exit status is 0 on `HLT`, 1 for a bad command line, 2 for a missing program
//! file, and a distinct status per fault category otherwise (see `ls8_core::common::error`).

use std::path::PathBuf;
use std::process;

use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

use ls8_core::common::error::EXIT_USAGE;
use ls8_core::isa::disasm::disassemble_program;
use ls8_core::sim::loader;
use ls8_core::{Config, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    author,
    version,
    about = "LS-8 8-bit CPU emulator",
    long_about = "Load an LS-8 program image (one binary byte per line, `#` comments) and run it until HLT.\n\nExamples:\n  ls8 programs/print8.ls8\n  ls8 --trace programs/call.ls8\n  ls8 --disassemble programs/stack.ls8"
)]
struct Cli {
    /// Program image to load.
    program: PathBuf,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print a trace line to stderr before each instruction.
    #[arg(short, long)]
    trace: bool,

    /// Skip unknown opcodes instead of faulting.
    #[arg(long)]
    lenient: bool,

    /// Print execution statistics to stderr on exit.
    #[arg(long)]
    stats: bool,

    /// Print a disassembly of the program and exit without running it.
    #[arg(short, long)]
    disassemble: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => EXIT_USAGE,
            };
            let _ = e.print();
            process::exit(code);
        }
    };

    init_logging();
    process::exit(run(&cli));
}

/// Installs the stderr log subscriber; `RUST_LOG` overrides the default `warn` level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Builds the configuration from the optional file and the command-line overrides.
fn build_config(cli: &Cli) -> Result<Config, i32> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path).map_err(|e| {
            eprintln!("{e}");
            e.exit_code()
        })?,
        None => Config::default(),
    };
    if cli.trace {
        config.general.trace_instructions = true;
    }
    if cli.lenient {
        config.general.strict_opcodes = false;
    }
    tracing::debug!(
        trace = config.general.trace_instructions,
        strict_opcodes = config.general.strict_opcodes,
        initial_sp = config.general.initial_sp,
        "configuration resolved"
    );
    Ok(config)
}

/// Loads and runs (or disassembles) the program; returns the process exit status.
fn run(cli: &Cli) -> i32 {
    let config = match build_config(cli) {
        Ok(config) => config,
        Err(code) => return code,
    };

    if cli.disassemble {
        return match loader::load_program_file(&cli.program) {
            Ok(image) => {
                for line in disassemble_program(&image) {
                    println!("{line}");
                }
                0
            }
            Err(e) => {
                eprintln!("{e}");
                e.exit_code()
            }
        };
    }

    let mut sim = Simulator::new(&config);
    if let Err(e) = sim.load_file(&cli.program) {
        eprintln!("{e}");
        return e.exit_code();
    }

    let status = match sim.run() {
        Ok(()) => 0,
        Err(fault) => {
            eprintln!("\n[!] FATAL: {fault}");
            sim.cpu.dump_state();
            fault.exit_code()
        }
    };
    if cli.stats {
        sim.stats.print();
    }
    status
}
