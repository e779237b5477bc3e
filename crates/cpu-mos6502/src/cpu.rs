//! 6502 CPU state and the budget-driven execute loop.
//!
//! Every fetch/read primitive charges its bus cost to a [`Cycles`]
//! budget owned by the loop. The budget is checked only at instruction
//! boundaries: an instruction that has started runs to completion even
//! if it pushes the budget below zero.

use std::fmt;

use emu_bus::{Bus, Cycles};

use crate::Registers;
use crate::decode::Instruction;

/// Fatal faults raised by the execute loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionError {
    /// Decode hit a byte with no defined handler.
    ///
    /// `pc` is the address the opcode byte was fetched from. Continuing
    /// past an unknown opcode would execute garbage, so the run stops
    /// here with no state mutated beyond PC advancing past the byte.
    UnhandledOpcode { opcode: u8, pc: u16 },
}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnhandledOpcode { opcode, pc } => {
                write!(f, "unhandled opcode ${opcode:02X} at ${pc:04X}")
            }
        }
    }
}

impl std::error::Error for ExecutionError {}

/// The MOS 6502 CPU.
///
/// Holds register and flag state; memory is borrowed per call through
/// the [`Bus`] contract so the caller keeps ownership of the store it
/// later inspects.
#[derive(Debug)]
pub struct Mos6502 {
    /// CPU registers.
    pub regs: Registers,
}

impl Default for Mos6502 {
    fn default() -> Self {
        Self::new()
    }
}

impl Mos6502 {
    /// Create a new 6502 in reset state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            regs: Registers::new(),
        }
    }

    /// Reset the CPU and zero the attached store.
    ///
    /// Re-establishes the reset register state regardless of prior
    /// contents and clears memory through the caller's handle, so the
    /// zeroing is observable. Idempotent; any loaded program must be
    /// reloaded afterwards.
    pub fn reset<B: Bus>(&mut self, bus: &mut B) {
        self.regs = Registers::new();
        bus.reset();
    }

    /// Fetch the byte at PC and advance PC. 1 cycle.
    ///
    /// The sole mechanism for consuming instruction-stream bytes; not
    /// for non-sequential reads.
    pub fn fetch_byte<B: Bus>(&mut self, cycles: &mut Cycles, bus: &mut B) -> u8 {
        let data = bus.read(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        cycles.spend(1);
        data
    }

    /// Fetch a little-endian word at PC and advance PC by 2. 2 cycles.
    pub fn fetch_word<B: Bus>(&mut self, cycles: &mut Cycles, bus: &mut B) -> u16 {
        let lo = u16::from(bus.read(self.regs.pc));
        self.regs.pc = self.regs.pc.wrapping_add(1);

        let hi = u16::from(bus.read(self.regs.pc));
        self.regs.pc = self.regs.pc.wrapping_add(1);

        cycles.spend(2);
        lo | (hi << 8)
    }

    /// Read the byte at an already-computed address. PC untouched. 1 cycle.
    pub fn read_byte<B: Bus>(&mut self, cycles: &mut Cycles, address: u16, bus: &mut B) -> u8 {
        let data = bus.read(address);
        cycles.spend(1);
        data
    }

    /// Run instructions until the cycle budget is exhausted.
    ///
    /// Returns the number of cycles consumed. A budget of zero or less
    /// executes nothing and returns `Ok(0)`; a final instruction that
    /// overruns the budget still counts in full.
    pub fn execute<B: Bus>(&mut self, budget: i64, bus: &mut B) -> Result<u64, ExecutionError> {
        let mut cycles = Cycles::new(budget);

        while !cycles.exhausted() {
            let opcode_pc = self.regs.pc;
            let opcode = self.fetch_byte(&mut cycles, bus);

            let Some(instruction) = Instruction::decode(opcode) else {
                return Err(ExecutionError::UnhandledOpcode {
                    opcode,
                    pc: opcode_pc,
                });
            };

            match instruction {
                Instruction::LdaImmediate => {
                    let value = self.fetch_byte(&mut cycles, bus);
                    self.lda(value);
                }
                Instruction::LdaZeroPage => {
                    let zp = self.fetch_byte(&mut cycles, bus);
                    let value = self.read_byte(&mut cycles, u16::from(zp), bus);
                    self.lda(value);
                }
                Instruction::LdaZeroPageX => {
                    let zp = self.fetch_byte(&mut cycles, bus);
                    // Indexing wraps within the zero page (no carry into
                    // the high byte) and is itself a timed step.
                    let effective = zp.wrapping_add(self.regs.x);
                    cycles.spend(1);
                    let value = self.read_byte(&mut cycles, u16::from(effective), bus);
                    self.lda(value);
                }
                Instruction::Jsr => {
                    let target = self.fetch_word(&mut cycles, bus);
                    // The return address points at the last byte of the
                    // call instruction.
                    let return_addr = self.regs.pc.wrapping_sub(1);
                    let stack = self.regs.push_word_addr();
                    bus.write_word(&mut cycles, return_addr, stack);
                    self.regs.pc = target;
                    cycles.spend(1);
                }
            }
        }

        Ok(cycles.consumed())
    }

    /// Current program counter.
    #[must_use]
    pub const fn pc(&self) -> u16 {
        self.regs.pc
    }

    /// Load the accumulator and derive N/Z. Loads touch no other flags.
    fn lda(&mut self, value: u8) {
        self.regs.a = value;
        self.regs.p.update_nz(value);
    }
}
