//! Educational 8-bit accumulator machine.
//!
//! This crate implements a minimal single-accumulator CPU with a fixed 256-cell
//! memory and the textual assembler that feeds it. It provides the following:
//! 1. **ISA:** The fixed 14-opcode instruction catalog with mnemonic aliases.
//! 2. **Assembler:** A single-pass translator from line-oriented source text to
//!    a 256-byte machine image plus a hex trace of every written byte.
//! 3. **Engine:** Register and memory state with a fetch-decode-execute `step`
//!    primitive, flag computation, and control transfer.
//! 4. **Observation:** Immutable register/memory snapshots for external
//!    display layers.
//!
//! The core is synchronous and performs no I/O; continuous execution is the
//! responsibility of an external driver that calls [`Machine::step`] at its
//! own cadence and stops on [`RunState::Halted`] or an error.

/// Single-pass assembler (source text to machine image).
pub mod asm;

/// Common types (flags, registers, snapshots, errors).
pub mod common;

/// Execution engine (registers, memory, fetch-decode-execute).
pub mod core;

/// Instruction catalog (opcodes, mnemonics, aliases).
pub mod isa;

/// Assembly and execution error types.
pub use crate::common::{AssemblyError, ExecutionError};
/// Register file, status flags, and observation snapshot.
pub use crate::common::{Flags, Registers, Snapshot};
/// Main engine type; construct with `Machine::new`.
pub use crate::core::{Machine, RunState};
/// The 14-variant opcode enumeration.
pub use crate::isa::Opcode;
