//! vnsim command-line driver.
//!
//! This binary plays the harness role around the simulator. It performs:
//! 1. **Demo:** Runs the built-in reference test bench and reports the result.
//! 2. **Image run:** Loads a raw program image into memory, fires the start signal with the
//!    entry address, and runs until the processor halts.
//!
//! Exit status: 0 when the program reached `END`, 1 when it halted on a fault, 2 on harness
//! errors (bad arguments, unreadable files, image too large).

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use vnsim_core::common::KernelError;
use vnsim_core::config::Config;
use vnsim_core::core::HaltReason;
use vnsim_core::isa::disasm::disassemble;
use vnsim_core::sim::loader;
use vnsim_core::sim::{Simulator, TestBench};

#[derive(Parser, Debug)]
#[command(
    name = "vnsim",
    author,
    version,
    about = "Minimal von-Neumann machine simulator",
    long_about = "Run a program on a four-register processor that reaches memory only through \
                  blocking transactions.\n\nExamples:\n  vnsim demo\n  vnsim run --image prog.bin --entry 0x21\n  \
                  RUST_LOG=debug vnsim run --image prog.bin --trace"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the built-in reference program (10 + 15 stored at 0x05).
    Demo,

    /// Load a raw image at address 0 and run it.
    Run {
        /// Raw program image; byte 0 of each 4-byte word is the opcode.
        #[arg(short, long)]
        image: PathBuf,

        /// Entry address (decimal or 0x-prefixed hex); defaults to the configured start pc.
        #[arg(short, long, value_parser = parse_addr)]
        entry: Option<u16>,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Log every decoded instruction (visible with RUST_LOG=debug).
        #[arg(long)]
        trace: bool,

        /// Print the image disassembly before running.
        #[arg(long)]
        disasm: bool,
    },
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Demo => cmd_demo(),
        Commands::Run {
            image,
            entry,
            config,
            trace,
            disasm,
        } => cmd_run(&image, entry, config, trace, disasm),
    }
}

/// Runs the reference test bench and prints registers and the stored result.
fn cmd_demo() -> ExitCode {
    let mut bench = match TestBench::seed() {
        Ok(bench) => bench,
        Err(e) => {
            error!("{e}");
            return ExitCode::from(2);
        }
    };
    let result = bench.run();
    let code = finish(&bench.sim, result);
    println!("mem[0x05] = {}", bench.sim.memory[0x05]);
    code
}

/// Loads an image and runs it from the entry address.
fn cmd_run(
    image: &Path,
    entry: Option<u16>,
    config_path: Option<PathBuf>,
    trace: bool,
    disasm: bool,
) -> ExitCode {
    let loaded = match config_path {
        Some(path) => Config::from_file(path),
        None => Ok(Config::default()),
    };
    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::from(2);
        }
    };
    config.general.trace_instructions |= trace;

    let bytes = match loader::read_image(image) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("{e}");
            return ExitCode::from(2);
        }
    };

    if disasm {
        for (offset, text) in disassemble(&bytes) {
            println!("{offset:#06x}  {text}");
        }
    }

    let mut sim = Simulator::new(&config);
    if let Err(e) = sim.memory.load(&bytes, 0) {
        error!("{e}");
        return ExitCode::from(2);
    }

    let pc = entry.unwrap_or(config.general.start_pc);
    let result = sim.run_from(pc);
    finish(&sim, result)
}

/// Prints the final machine state and maps the halt reason to an exit code.
fn finish(sim: &Simulator, result: Result<HaltReason, KernelError>) -> ExitCode {
    let reason = match result {
        Ok(reason) => reason,
        Err(e) => {
            error!("{e}");
            return ExitCode::from(2);
        }
    };

    let regs = sim.cpu.regs().snapshot();
    println!();
    for (i, val) in regs.iter().enumerate() {
        println!("R{i} = {val:#04x} ({val})");
    }
    println!("pc = {:#06x}", sim.cpu.pc());
    println!("{}", sim.cpu.stats());

    match reason {
        HaltReason::End => ExitCode::SUCCESS,
        HaltReason::Fault(fault) => {
            println!("halted on fault: {fault}");
            ExitCode::from(1)
        }
    }
}

/// Parses a decimal or `0x`-prefixed hexadecimal 16-bit address.
fn parse_addr(s: &str) -> Result<u16, String> {
    let parsed = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .map_or_else(|| s.parse::<u16>(), |hex| u16::from_str_radix(hex, 16));
    parsed.map_err(|e| format!("invalid address '{s}': {e}"))
}
