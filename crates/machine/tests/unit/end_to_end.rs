//! # End-to-End Program Tests
//!
//! Complete programs assembled and run to completion, including the demo
//! programs shipped with the repository.

use pretty_assertions::assert_eq;

use acc8_core::{AssemblyError, Machine};

use crate::common::{assembled, run_to_halt};

const ADDITION: &str = include_str!("../../../../demos/addition.asm");
const COUNTDOWN: &str = include_str!("../../../../demos/countdown.asm");
const COUNTER: &str = include_str!("../../../../demos/counter.asm");

/// The addition program computes 5 + 7 and stores 12.
#[test]
fn addition_program_runs_to_completion() {
    let mut machine = Machine::new();
    let trace = machine.assemble(ADDITION).unwrap();
    assert_eq!(
        trace,
        ["01", "0A", "03", "0B", "02", "0C", "07", "05", "07", "00"]
    );

    let steps = run_to_halt(&mut machine, 10);
    assert_eq!(steps, 4, "LOAD, ADD, STORE, HALT");
    assert_eq!(machine.registers().acc, 12);
    assert_eq!(machine.memory()[12], 12);
}

/// The countdown program decrements from 5 and halts at zero.
#[test]
fn countdown_program_reaches_zero() {
    let mut machine = assembled(COUNTDOWN);
    run_to_halt(&mut machine, 100);
    assert_eq!(machine.registers().acc, 0);
    assert_eq!(machine.memory()[31], 0, "counter location");
    assert_eq!(machine.memory()[32], 1, "last displayed value");
}

/// The counter program counts up and halts when the limit is reached.
#[test]
fn counter_program_reaches_limit() {
    let mut machine = assembled(COUNTER);
    run_to_halt(&mut machine, 100);
    assert_eq!(machine.registers().acc, 5);
    assert_eq!(machine.memory()[41], 4, "last stored value before the limit");
}

/// Assembling the same source twice from a reset engine produces identical
/// memory images and traces.
#[test]
fn reassembly_round_trips() {
    let mut machine = Machine::new();
    let first_trace = machine.assemble(ADDITION).unwrap();
    let first_memory = machine.snapshot().memory;

    machine.reset();
    let second_trace = machine.assemble(ADDITION).unwrap();
    let second_memory = machine.snapshot().memory;

    assert_eq!(first_trace, second_trace);
    assert_eq!(first_memory, second_memory);
}

/// A source with an unknown mnemonic fails assembly and leaves memory zero.
#[test]
fn unknown_instruction_leaves_memory_untouched() {
    let mut machine = Machine::new();
    let err = machine.assemble("FOO 1\nHALT").unwrap_err();
    assert_eq!(
        err,
        AssemblyError::UnknownInstruction {
            name: "FOO".to_string(),
            line: 1,
        }
    );
    assert!(machine.memory().iter().all(|&byte| byte == 0));
}

/// An 8-bit overflow program: 250 + 10 wraps to 4 with CARRY set.
#[test]
fn wrapping_addition_program() {
    use acc8_core::Flags;

    let mut machine = assembled("LOAD 10\nADD 11\nSTORE 12\nHALT\n.org 10\n250\n10\n0");
    run_to_halt(&mut machine, 8);
    assert_eq!(machine.registers().acc, 4);
    assert_eq!(machine.memory()[12], 4);
    assert!(machine.registers().flags.contains(Flags::CARRY));
}
