//! # Instruction Catalog Tests
//!
//! Verifies the fixed mnemonic/opcode mapping in both directions, alias
//! resolution, case-insensitivity, and operand arity.

use acc8_core::Opcode;

/// Every defined opcode as (byte, variant, canonical mnemonic).
const CATALOG: [(u8, Opcode, &str); 14] = [
    (0x01, Opcode::Load, "LOAD"),
    (0x02, Opcode::Store, "STORE"),
    (0x03, Opcode::Add, "ADD"),
    (0x04, Opcode::Sub, "SUB"),
    (0x05, Opcode::Jump, "JUMP"),
    (0x06, Opcode::Jzero, "JZERO"),
    (0x07, Opcode::Halt, "HALT"),
    (0x08, Opcode::Cmp, "CMP"),
    (0x09, Opcode::Jlt, "JLT"),
    (0x0A, Opcode::Jgt, "JGT"),
    (0x0B, Opcode::Jle, "JLE"),
    (0x0C, Opcode::Jge, "JGE"),
    (0x0D, Opcode::Jeq, "JEQ"),
    (0x0E, Opcode::Jne, "JNE"),
];

/// Verifies the byte and mnemonic directions agree for all 14 instructions.
#[test]
fn catalog_is_bidirectional() {
    for (byte, opcode, mnemonic) in CATALOG {
        assert_eq!(Opcode::from_byte(byte), Some(opcode));
        assert_eq!(opcode.byte(), byte);
        assert_eq!(Opcode::from_mnemonic(mnemonic), Some(opcode));
        assert_eq!(opcode.mnemonic(), mnemonic);
    }
}

/// Bytes outside the defined opcode range decode to `None`.
#[test]
fn undefined_bytes_do_not_decode() {
    for byte in [0x00, 0x0F, 0x10, 0x63, 0x99, 0xFF] {
        assert_eq!(Opcode::from_byte(byte), None, "byte {byte:#04X}");
    }
}

/// Aliases resolve to their canonical instructions.
#[test]
fn aliases_resolve() {
    assert_eq!(Opcode::from_mnemonic("HLT"), Some(Opcode::Halt));
    assert_eq!(Opcode::from_mnemonic("JZ"), Some(Opcode::Jzero));
    assert_eq!(Opcode::from_mnemonic("JMP"), Some(Opcode::Jump));
    assert_eq!(Opcode::from_mnemonic("JE"), Some(Opcode::Jeq));
    assert_eq!(Opcode::from_mnemonic("JNZ"), Some(Opcode::Jne));
}

/// Mnemonic lookup is case-insensitive, for aliases too.
#[test]
fn lookup_is_case_insensitive() {
    assert_eq!(Opcode::from_mnemonic("load"), Some(Opcode::Load));
    assert_eq!(Opcode::from_mnemonic("Load"), Some(Opcode::Load));
    assert_eq!(Opcode::from_mnemonic("jz"), Some(Opcode::Jzero));
    assert_eq!(Opcode::from_mnemonic("hlt"), Some(Opcode::Halt));
}

/// Unrecognized mnemonics fail lookup.
#[test]
fn unknown_mnemonics_fail() {
    for name in ["FOO", "LD", "MUL", "BRA", ""] {
        assert_eq!(Opcode::from_mnemonic(name), None, "mnemonic {name:?}");
    }
}

/// `HALT` is the only operand-less instruction.
#[test]
fn halt_is_the_only_operand_less_instruction() {
    for (_, opcode, _) in CATALOG {
        assert_eq!(opcode.has_operand(), opcode != Opcode::Halt);
    }
}

/// Opcodes display as their canonical mnemonic.
#[test]
fn display_uses_canonical_mnemonic() {
    assert_eq!(Opcode::Jzero.to_string(), "JZERO");
    assert_eq!(Opcode::Halt.to_string(), "HALT");
}
