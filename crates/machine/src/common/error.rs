//! Assembly and execution error types.
//!
//! All failures are surfaced to the caller as values, never as panics. The
//! external driver decides whether to report, halt, or allow correction and
//! re-assembly.

use thiserror::Error;

/// Errors raised while assembling source text.
///
/// Each variant carries the 1-based number of the offending line. Assembly
/// aborts at the first error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AssemblyError {
    /// A `.org` directive whose operand is not an integer in [0,255].
    #[error("invalid .org address at line {line}")]
    InvalidOrg {
        /// 1-based source line number.
        line: usize,
    },

    /// A data line whose value is not an integer in [0,255].
    #[error("invalid data value at line {line}")]
    InvalidData {
        /// 1-based source line number.
        line: usize,
    },

    /// A mnemonic that, after alias resolution, is not in the catalog.
    #[error("unknown instruction `{name}` at line {line}")]
    UnknownInstruction {
        /// The unrecognized mnemonic, uppercased.
        name: String,
        /// 1-based source line number.
        line: usize,
    },

    /// An operand token that is not an integer in [0,255].
    #[error("invalid operand at line {line}")]
    InvalidOperand {
        /// 1-based source line number.
        line: usize,
    },
}

/// Errors raised while executing an instruction.
///
/// Execution stops; the engine state reflects the fetch that produced the bad
/// opcode (PC already advanced past it).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// The fetched byte is not a defined opcode.
    #[error("unknown opcode {0:#04X}")]
    UnknownOpcode(u8),
}
