//! Execution engine.
//!
//! This module implements the machine itself: the register file, the 256-cell
//! memory, and the fetch-decode-execute cycle. It performs the following:
//! 1. **Fetch:** MAR ← PC; MBR ← memory\[MAR\]; IR ← MBR; PC advances.
//! 2. **Decode:** The IR byte is matched exhaustively against the opcode
//!    enumeration; undefined bytes stop execution with an error.
//! 3. **Execute:** Arithmetic updates ACC and recomputes FLAGS from scratch;
//!    compare sets FLAGS without touching ACC; jumps rewrite PC.
//! 4. **Observation:** Snapshots expose register and memory state read-only.
//!
//! The engine is single-threaded and cooperative: [`Machine::step`] is the
//! only mutator of register/memory state, and callers serialize access.

use tracing::trace;

use crate::asm;
use crate::common::{AssemblyError, ExecutionError, Flags, Registers, Snapshot, MEMORY_SIZE};
use crate::isa::Opcode;

/// Outcome of a successful [`Machine::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// The instruction completed and the machine can keep stepping.
    Continuing,
    /// A `HALT` instruction executed; the driver should stop stepping.
    Halted,
}

/// The machine: CPU registers plus the 256-cell memory.
///
/// State is created zeroed, overwritten (memory only) by [`Machine::assemble`],
/// mutated in place by [`Machine::step`], and returned to the initial state by
/// [`Machine::reset`].
#[derive(Clone, Debug)]
pub struct Machine {
    regs: Registers,
    memory: [u8; MEMORY_SIZE],
}

impl Machine {
    /// Creates a machine with all registers and memory cells zeroed.
    pub fn new() -> Self {
        Self {
            regs: Registers::default(),
            memory: [0; MEMORY_SIZE],
        }
    }

    /// Returns the current register values.
    pub const fn registers(&self) -> &Registers {
        &self.regs
    }

    /// Returns the full memory contents.
    pub const fn memory(&self) -> &[u8; MEMORY_SIZE] {
        &self.memory
    }

    /// Captures an immutable snapshot of registers and memory for display.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            registers: self.regs,
            memory: self.memory.to_vec(),
        }
    }

    /// Zeroes all registers and all memory, returning to the initial state.
    pub fn reset(&mut self) {
        self.regs = Registers::default();
        self.memory = [0; MEMORY_SIZE];
        trace!("machine reset");
    }

    /// Assembles source text into this machine's memory.
    ///
    /// On success the memory is fully replaced by the assembled image. On
    /// failure the memory is restored to all-zero so the machine state stays
    /// well-defined.
    ///
    /// # Arguments
    ///
    /// * `source` - Line-oriented assembly source text.
    ///
    /// # Returns
    ///
    /// The write-order trace of two-digit uppercase hex byte strings, or the
    /// first [`AssemblyError`].
    pub fn assemble(&mut self, source: &str) -> Result<Vec<String>, AssemblyError> {
        match asm::assemble(source) {
            Ok(image) => {
                self.memory = image.memory;
                Ok(image.trace)
            }
            Err(err) => {
                self.memory = [0; MEMORY_SIZE];
                Err(err)
            }
        }
    }

    /// Performs exactly one fetch-decode-execute cycle.
    ///
    /// # Returns
    ///
    /// [`RunState::Continuing`] if the machine can keep stepping,
    /// [`RunState::Halted`] on `HALT`, or [`ExecutionError::UnknownOpcode`]
    /// if the fetched byte is not a defined opcode (PC has already advanced
    /// past the fetch).
    pub fn step(&mut self) -> Result<RunState, ExecutionError> {
        self.regs.mar = self.regs.pc;
        self.regs.mbr = self.memory[usize::from(self.regs.mar)];
        self.regs.ir = self.regs.mbr;
        self.regs.pc = self.regs.pc.wrapping_add(1);

        let opcode = Opcode::from_byte(self.regs.ir)
            .ok_or(ExecutionError::UnknownOpcode(self.regs.ir))?;

        match opcode {
            Opcode::Load => {
                let addr = self.fetch_operand();
                self.regs.mbr = self.memory[usize::from(addr)];
                self.regs.acc = self.regs.mbr;
                self.update_zero_negative();
                trace!(addr, acc = self.regs.acc, "LOAD");
            }
            Opcode::Store => {
                let addr = self.fetch_operand();
                self.regs.mbr = self.regs.acc;
                self.memory[usize::from(addr)] = self.regs.mbr;
                trace!(addr, acc = self.regs.acc, "STORE");
            }
            Opcode::Add => {
                let addr = self.fetch_operand();
                self.regs.mbr = self.memory[usize::from(addr)];
                let sum = u16::from(self.regs.acc) + u16::from(self.regs.mbr);
                let result = (sum & 0xFF) as u8;
                self.regs.flags.clear();
                if sum > 0xFF {
                    self.regs.flags.insert(Flags::CARRY);
                }
                if (self.regs.acc ^ result) & (self.regs.mbr ^ result) & 0x80 != 0 {
                    self.regs.flags.insert(Flags::OVERFLOW);
                }
                self.regs.acc = result;
                self.update_zero_negative();
                trace!(addr, acc = self.regs.acc, flags = %self.regs.flags, "ADD");
            }
            Opcode::Sub => {
                let addr = self.fetch_operand();
                self.regs.mbr = self.memory[usize::from(addr)];
                let diff = i16::from(self.regs.acc) - i16::from(self.regs.mbr);
                let result = (diff & 0xFF) as u8;
                self.regs.flags.clear();
                if diff < 0 {
                    self.regs.flags.insert(Flags::CARRY);
                }
                if (self.regs.acc ^ self.regs.mbr) & (self.regs.acc ^ result) & 0x80 != 0 {
                    self.regs.flags.insert(Flags::OVERFLOW);
                }
                self.regs.acc = result;
                self.update_zero_negative();
                trace!(addr, acc = self.regs.acc, flags = %self.regs.flags, "SUB");
            }
            Opcode::Cmp => {
                let addr = self.fetch_operand();
                self.regs.mbr = self.memory[usize::from(addr)];
                let result = i16::from(self.regs.acc) - i16::from(self.regs.mbr);
                self.regs.flags.clear();
                if result == 0 {
                    self.regs.flags.insert(Flags::ZERO);
                }
                if result < 0 {
                    self.regs.flags.insert(Flags::NEGATIVE);
                }
                if !(-128..=127).contains(&result) {
                    self.regs.flags.insert(Flags::OVERFLOW);
                }
                trace!(addr, acc = self.regs.acc, flags = %self.regs.flags, "CMP");
            }
            Opcode::Jump => {
                self.regs.pc = self.memory[usize::from(self.regs.pc)];
                trace!(pc = self.regs.pc, "JUMP");
            }
            Opcode::Jzero => {
                // Tests ACC directly, not FLAGS.
                self.branch_if(self.regs.acc == 0, "JZERO");
            }
            Opcode::Jlt => {
                self.branch_if(self.regs.flags.contains(Flags::NEGATIVE), "JLT");
            }
            Opcode::Jgt => {
                let taken = !self.regs.flags.contains(Flags::NEGATIVE | Flags::ZERO);
                self.branch_if(taken, "JGT");
            }
            Opcode::Jle => {
                let taken = self.regs.flags.contains(Flags::NEGATIVE | Flags::ZERO);
                self.branch_if(taken, "JLE");
            }
            Opcode::Jge => {
                self.branch_if(!self.regs.flags.contains(Flags::NEGATIVE), "JGE");
            }
            Opcode::Jeq => {
                self.branch_if(self.regs.flags.contains(Flags::ZERO), "JEQ");
            }
            Opcode::Jne => {
                self.branch_if(!self.regs.flags.contains(Flags::ZERO), "JNE");
            }
            Opcode::Halt => {
                trace!("HALT");
                return Ok(RunState::Halted);
            }
        }

        Ok(RunState::Continuing)
    }

    /// Reads the operand byte at PC into MAR and advances PC.
    fn fetch_operand(&mut self) -> u8 {
        self.regs.mar = self.memory[usize::from(self.regs.pc)];
        self.regs.pc = self.regs.pc.wrapping_add(1);
        self.regs.mar
    }

    /// Takes the branch (PC ← memory\[PC\]) or falls through (PC advances).
    fn branch_if(&mut self, taken: bool, name: &'static str) {
        if taken {
            self.regs.pc = self.memory[usize::from(self.regs.pc)];
        } else {
            self.regs.pc = self.regs.pc.wrapping_add(1);
        }
        trace!(taken, pc = self.regs.pc, "{name}");
    }

    /// Recomputes ZERO and NEGATIVE from ACC; CARRY and OVERFLOW are left
    /// untouched.
    fn update_zero_negative(&mut self) {
        self.regs.flags.remove(Flags::ZERO | Flags::NEGATIVE);
        if self.regs.acc == 0 {
            self.regs.flags.insert(Flags::ZERO);
        }
        if self.regs.acc & 0x80 != 0 {
            self.regs.flags.insert(Flags::NEGATIVE);
        }
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}
