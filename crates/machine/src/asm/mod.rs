//! Single-pass assembler.
//!
//! Converts newline-delimited source text into a 256-byte machine image. It
//! performs the following:
//! 1. **Layout:** An implicit write cursor starts at address 0 and is moved
//!    by `.org` directives.
//! 2. **Data:** A line that is a bare decimal literal in [0,255] is written
//!    as a data byte.
//! 3. **Code:** Instruction lines are alias-resolved, looked up in the
//!    catalog, and encoded as opcode byte plus optional operand byte.
//! 4. **Trace:** Every written byte is appended to the output trace as a
//!    two-digit uppercase hex string, in write order.
//!
//! The pass is strictly sequential and label-blind: a label-definition line
//! (`name:`) is a no-op, and operands must already be literal numeric
//! addresses. Assembly aborts at the first error.

use tracing::debug;

use crate::common::{AssemblyError, MEMORY_SIZE};
use crate::isa::Opcode;

/// The output of assembly: a populated memory and the write-order hex trace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MachineImage {
    /// The fully populated 256-byte memory.
    pub memory: [u8; MEMORY_SIZE],
    /// Two-digit uppercase hex strings for the bytes written, in write order.
    pub trace: Vec<String>,
}

/// Assembles source text into a machine image.
///
/// # Arguments
///
/// * `source` - Line-oriented assembly source; keywords are
///   case-insensitive and a `;` starts a comment anywhere on a line.
///
/// # Returns
///
/// The assembled [`MachineImage`], or the first [`AssemblyError`] with the
/// offending 1-based line number.
pub fn assemble(source: &str) -> Result<MachineImage, AssemblyError> {
    let mut memory = [0_u8; MEMORY_SIZE];
    let mut trace = Vec::new();
    let mut cursor: u8 = 0;

    for (idx, raw) in source.lines().enumerate() {
        let line = idx + 1;
        let text = strip_comment(raw).trim();
        if text.is_empty() {
            continue;
        }

        let mut tokens = text.split_whitespace();
        let Some(head) = tokens.next() else {
            continue;
        };

        if head.eq_ignore_ascii_case(".org") {
            cursor = tokens
                .next()
                .and_then(parse_byte)
                .ok_or(AssemblyError::InvalidOrg { line })?;
            continue;
        }

        // A line that parses entirely as a decimal integer is a data byte.
        if let Ok(value) = text.parse::<i64>() {
            if !(0..=255).contains(&value) {
                return Err(AssemblyError::InvalidData { line });
            }
            emit(&mut memory, &mut trace, &mut cursor, value as u8);
            continue;
        }

        // Label definition: records nothing in this single-pass design.
        if text.ends_with(':') {
            continue;
        }

        let opcode =
            Opcode::from_mnemonic(head).ok_or_else(|| AssemblyError::UnknownInstruction {
                name: head.to_ascii_uppercase(),
                line,
            })?;
        emit(&mut memory, &mut trace, &mut cursor, opcode.byte());

        if let Some(token) = tokens.next() {
            if opcode.has_operand() {
                let operand =
                    parse_byte(token).ok_or(AssemblyError::InvalidOperand { line })?;
                emit(&mut memory, &mut trace, &mut cursor, operand);
            }
        }
    }

    debug!(bytes = trace.len(), "assembly complete");
    Ok(MachineImage { memory, trace })
}

/// Writes a byte at the cursor, records its hex form, and advances the
/// cursor (wrapping, so every write stays inside the 256-cell memory).
fn emit(memory: &mut [u8; MEMORY_SIZE], trace: &mut Vec<String>, cursor: &mut u8, byte: u8) {
    memory[usize::from(*cursor)] = byte;
    trace.push(format!("{byte:02X}"));
    *cursor = cursor.wrapping_add(1);
}

/// Returns the line with any `;` comment removed.
fn strip_comment(line: &str) -> &str {
    match line.find(';') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Parses a decimal token into a byte, rejecting values outside [0,255].
fn parse_byte(token: &str) -> Option<u8> {
    token
        .parse::<i64>()
        .ok()
        .filter(|value| (0..=255).contains(value))
        .map(|value| value as u8)
}
