//! Instruction catalog.
//!
//! The machine has a fixed set of 14 one-byte opcodes. This module provides
//! both directions of the mapping:
//! 1. **Assembly:** Mnemonic (with alias resolution) to opcode, used by the
//!    assembler.
//! 2. **Decode:** Byte to opcode, used by the engine's decode stage; unknown
//!    bytes decode to `None`.
//! 3. **Disassembly:** Opcode to canonical mnemonic, used for trace output
//!    and diagnostics.
//!
//! Every instruction except `HALT` takes exactly one operand byte encoded
//! immediately after the opcode.

use std::fmt;

/// One of the machine's 14 instructions.
///
/// The discriminant is the opcode byte as encoded in memory.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[repr(u8)]
pub enum Opcode {
    /// Load memory\[addr\] into ACC.
    Load = 0x01,
    /// Store ACC into memory\[addr\].
    Store = 0x02,
    /// Add memory\[addr\] to ACC.
    Add = 0x03,
    /// Subtract memory\[addr\] from ACC.
    Sub = 0x04,
    /// Unconditional jump to addr.
    Jump = 0x05,
    /// Jump to addr if ACC is zero (tests ACC directly, not FLAGS).
    Jzero = 0x06,
    /// Stop execution.
    Halt = 0x07,
    /// Compare ACC with memory\[addr\]; sets FLAGS only.
    Cmp = 0x08,
    /// Jump if the last CMP was less-than.
    Jlt = 0x09,
    /// Jump if the last CMP was greater-than.
    Jgt = 0x0A,
    /// Jump if the last CMP was less-or-equal.
    Jle = 0x0B,
    /// Jump if the last CMP was greater-or-equal.
    Jge = 0x0C,
    /// Jump if the last CMP was equal.
    Jeq = 0x0D,
    /// Jump if the last CMP was not-equal.
    Jne = 0x0E,
}

impl Opcode {
    /// Decodes an opcode byte.
    ///
    /// # Arguments
    ///
    /// * `byte` - The raw byte fetched from memory.
    ///
    /// # Returns
    ///
    /// The matching opcode, or `None` if the byte is not a defined opcode.
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x01 => Some(Self::Load),
            0x02 => Some(Self::Store),
            0x03 => Some(Self::Add),
            0x04 => Some(Self::Sub),
            0x05 => Some(Self::Jump),
            0x06 => Some(Self::Jzero),
            0x07 => Some(Self::Halt),
            0x08 => Some(Self::Cmp),
            0x09 => Some(Self::Jlt),
            0x0A => Some(Self::Jgt),
            0x0B => Some(Self::Jle),
            0x0C => Some(Self::Jge),
            0x0D => Some(Self::Jeq),
            0x0E => Some(Self::Jne),
            _ => None,
        }
    }

    /// Looks up a mnemonic, case-insensitively, resolving aliases first.
    ///
    /// Recognized aliases: `HLT`→`HALT`, `JZ`→`JZERO`, `JMP`→`JUMP`,
    /// `JE`→`JEQ`, `JNZ`→`JNE`.
    ///
    /// # Arguments
    ///
    /// * `mnemonic` - The mnemonic token from a source line.
    ///
    /// # Returns
    ///
    /// The matching opcode, or `None` if the canonical mnemonic is not in the
    /// catalog.
    pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
        let upper = mnemonic.to_ascii_uppercase();
        match resolve_alias(&upper) {
            "LOAD" => Some(Self::Load),
            "STORE" => Some(Self::Store),
            "ADD" => Some(Self::Add),
            "SUB" => Some(Self::Sub),
            "JUMP" => Some(Self::Jump),
            "JZERO" => Some(Self::Jzero),
            "HALT" => Some(Self::Halt),
            "CMP" => Some(Self::Cmp),
            "JLT" => Some(Self::Jlt),
            "JGT" => Some(Self::Jgt),
            "JLE" => Some(Self::Jle),
            "JGE" => Some(Self::Jge),
            "JEQ" => Some(Self::Jeq),
            "JNE" => Some(Self::Jne),
            _ => None,
        }
    }

    /// Returns the canonical mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Load => "LOAD",
            Self::Store => "STORE",
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Jump => "JUMP",
            Self::Jzero => "JZERO",
            Self::Halt => "HALT",
            Self::Cmp => "CMP",
            Self::Jlt => "JLT",
            Self::Jgt => "JGT",
            Self::Jle => "JLE",
            Self::Jge => "JGE",
            Self::Jeq => "JEQ",
            Self::Jne => "JNE",
        }
    }

    /// Returns the opcode byte as encoded in memory.
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Returns `true` if the instruction takes an operand byte.
    ///
    /// `HALT` is the only operand-less instruction; it encodes to a single
    /// byte, everything else to two.
    pub const fn has_operand(self) -> bool {
        !matches!(self, Self::Halt)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Maps an alias to its canonical mnemonic; non-aliases pass through.
fn resolve_alias(mnemonic: &str) -> &str {
    match mnemonic {
        "HLT" => "HALT",
        "JZ" => "JZERO",
        "JMP" => "JUMP",
        "JE" => "JEQ",
        "JNZ" => "JNE",
        other => other,
    }
}
