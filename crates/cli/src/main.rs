//! Accumulator machine driver.
//!
//! This binary is the external scheduler for the `acc8-core` engine. It
//! performs:
//! 1. **Assemble:** Translate a source file and print the machine-code trace.
//! 2. **Run:** Assemble, then repeatedly call `step` until the machine halts,
//!    errors, or a step budget is exhausted; an optional per-step delay
//!    reproduces paced execution.
//! 3. **Report:** Print the final register/memory snapshot, optionally as
//!    JSON.
//!
//! The core itself is synchronous; the run loop here is cancellable between
//! any two steps (Ctrl-C simply stops the process between instructions).

use std::io::Read;
use std::time::Duration;
use std::{fs, process, thread};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use acc8_core::{Machine, RunState, Snapshot};

#[derive(Parser, Debug)]
#[command(
    name = "acc8",
    author,
    version,
    about = "Educational 8-bit accumulator machine",
    long_about = "Assemble and run programs for the 8-bit accumulator machine.\n\nExamples:\n  acc8 asm demos/addition.asm\n  acc8 run demos/addition.asm\n  acc8 run demos/countdown.asm --interval-ms 250\n  acc8 run demos/counter.asm --json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Assemble a source file and print the machine-code trace.
    Asm {
        /// Source file (`-` reads stdin).
        file: String,
    },

    /// Assemble a source file and run it to completion.
    Run {
        /// Source file (`-` reads stdin).
        file: String,

        /// Stop after this many steps even if the machine has not halted.
        #[arg(long, default_value_t = 100_000)]
        max_steps: u64,

        /// Delay between steps, in milliseconds (0 = full speed).
        #[arg(long, default_value_t = 0)]
        interval_ms: u64,

        /// Print the final snapshot as JSON instead of a report.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Asm { file } => cmd_asm(&file),
        Commands::Run {
            file,
            max_steps,
            interval_ms,
            json,
        } => cmd_run(&file, max_steps, interval_ms, json),
    }
}

/// Assembles the file and prints the write-order hex trace.
fn cmd_asm(file: &str) {
    let source = read_source(file);
    let mut machine = Machine::new();
    match machine.assemble(&source) {
        Ok(trace) => println!("Machine Code: {}", trace.join(" ")),
        Err(err) => {
            eprintln!("assembly failed: {err}");
            process::exit(1);
        }
    }
}

/// Assembles the file, then loops on `step` until halt, error, or budget.
fn cmd_run(file: &str, max_steps: u64, interval_ms: u64, json: bool) {
    let source = read_source(file);
    let mut machine = Machine::new();

    match machine.assemble(&source) {
        Ok(trace) => println!("Machine Code: {}", trace.join(" ")),
        Err(err) => {
            eprintln!("assembly failed: {err}");
            process::exit(1);
        }
    }

    let mut steps: u64 = 0;
    while steps < max_steps {
        match machine.step() {
            Ok(RunState::Continuing) => {
                steps += 1;
                if interval_ms > 0 {
                    thread::sleep(Duration::from_millis(interval_ms));
                }
            }
            Ok(RunState::Halted) => {
                steps += 1;
                println!("Halted after {steps} steps");
                report(&machine.snapshot(), json);
                return;
            }
            Err(err) => {
                eprintln!("execution failed after {steps} steps: {err}");
                report(&machine.snapshot(), json);
                process::exit(1);
            }
        }
    }

    eprintln!("step budget of {max_steps} exhausted without HALT");
    report(&machine.snapshot(), json);
    process::exit(1);
}

/// Prints the final snapshot, either as JSON or as a register/memory report.
fn report(snapshot: &Snapshot, json: bool) {
    if json {
        match serde_json::to_string_pretty(snapshot) {
            Ok(text) => println!("{text}"),
            Err(err) => {
                eprintln!("snapshot serialization failed: {err}");
                process::exit(1);
            }
        }
        return;
    }

    let regs = &snapshot.registers;
    println!(
        "ACC={:02X} PC={:02X} IR={:02X} MAR={:02X} MBR={:02X} FLAGS={:04b} {:04b} ({})",
        regs.acc,
        regs.pc,
        regs.ir,
        regs.mar,
        regs.mbr,
        regs.flags.bits() >> 4,
        regs.flags.bits() & 0x0F,
        regs.flags,
    );

    for (row, chunk) in snapshot.memory.chunks(16).enumerate() {
        if chunk.iter().all(|&byte| byte == 0) {
            continue;
        }
        let cells: Vec<String> = chunk.iter().map(|byte| format!("{byte:02X}")).collect();
        println!("0x{:02X}: {}", row * 16, cells.join(" "));
    }
}

/// Reads the source file, or stdin when the path is `-`.
fn read_source(file: &str) -> String {
    if file == "-" {
        let mut buffer = String::new();
        if let Err(err) = std::io::stdin().read_to_string(&mut buffer) {
            eprintln!("failed to read stdin: {err}");
            process::exit(1);
        }
        return buffer;
    }
    match fs::read_to_string(file) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("failed to read {file}: {err}");
            process::exit(1);
        }
    }
}
