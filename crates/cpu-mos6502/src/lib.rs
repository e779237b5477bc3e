//! Cycle-budgeted MOS 6502 CPU core.
//!
//! Models the registers, status flags, and fetch-decode-execute loop of
//! the 6502 against a [`emu_bus::Bus`] store. Execution runs whole
//! instructions until a caller-supplied cycle budget is spent.
//!
//! Only a small opcode subset is handled (LDA immediate / zero page /
//! zero page,X and JSR); any other byte is a hard decode fault, never a
//! silent no-op.

mod cpu;
mod decode;
pub mod flags;
mod registers;

pub use cpu::{ExecutionError, Mos6502};
pub use decode::{Instruction, JSR, LDA_IMM, LDA_ZP, LDA_ZPX};
pub use flags::Status;
pub use registers::{RESET_PC, Registers};
