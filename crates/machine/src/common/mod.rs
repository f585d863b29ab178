//! Common types shared by the assembler and the execution engine.
//!
//! This module provides the fundamental building blocks of the machine:
//! 1. **Flags:** The FLAGS register bitset (ZERO/NEGATIVE/CARRY/OVERFLOW).
//! 2. **Registers:** The engine-owned register file (ACC, PC, IR, MAR, MBR,
//!    FLAGS).
//! 3. **Snapshots:** An immutable view of registers and memory for display.
//! 4. **Errors:** Assembly and execution error taxonomies.

use serde::Serialize;

/// Assembly and execution error types.
pub mod error;

/// Status flag bitset.
pub mod flags;

pub use error::{AssemblyError, ExecutionError};
pub use flags::Flags;

/// Number of memory cells; addresses run 0 through `MEMORY_SIZE - 1`.
pub const MEMORY_SIZE: usize = 256;

/// The engine's register file.
///
/// Every register holds a value in [0,255]. Registers are owned exclusively by
/// the engine and mutated only through [`crate::Machine::step`],
/// [`crate::Machine::reset`], and [`crate::Machine::assemble`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Registers {
    /// Accumulator: target of arithmetic and load.
    pub acc: u8,
    /// Program counter: address of the next instruction to fetch.
    pub pc: u8,
    /// Instruction register: opcode of the instruction currently executing.
    pub ir: u8,
    /// Memory address register: address most recently referenced.
    pub mar: u8,
    /// Memory buffer register: value most recently read or written.
    pub mbr: u8,
    /// Status flags set by arithmetic and compare operations.
    pub flags: Flags,
}

/// Immutable view of the machine state for display and verification.
///
/// Produced by [`crate::Machine::snapshot`]; holds copies, so it stays valid
/// across subsequent steps.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Register values at the time of the snapshot.
    pub registers: Registers,
    /// All 256 memory cells, in address order.
    pub memory: Vec<u8>,
}
