//! 6502 CPU registers.

use crate::Status;

/// Address execution starts from after reset.
///
/// On hardware this is the reset vector location; this core starts
/// executing there directly instead of dereferencing the vector.
pub const RESET_PC: u16 = 0xFFFC;

/// 6502 CPU register set.
///
/// - A: 8-bit accumulator
/// - X, Y: 8-bit index registers
/// - SP: 8-bit stack pointer (stack is the fixed page $0100-$01FF)
/// - PC: 16-bit program counter
/// - P: status flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    /// Accumulator.
    pub a: u8,
    /// X index register.
    pub x: u8,
    /// Y index register.
    pub y: u8,
    /// Stack pointer, an offset into the stack page.
    pub sp: u8,
    /// Program counter.
    pub pc: u16,
    /// Processor status flags.
    pub p: Status,
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

impl Registers {
    /// Create registers in reset state.
    ///
    /// PC starts at [`RESET_PC`]; A, X, Y and all flags are zero. The
    /// stack pointer resets to $00, the stack page offset of the
    /// conventional $0100 start-of-stack address.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: 0x00,
            pc: RESET_PC,
            p: Status::new(),
        }
    }

    /// Full stack address for the current stack pointer.
    #[must_use]
    pub const fn stack_addr(&self) -> u16 {
        0x0100 | self.sp as u16
    }

    /// Reserve stack space for a two-byte push, returning the address
    /// the word should be written at.
    pub fn push_word_addr(&mut self) -> u16 {
        let addr = self.stack_addr();
        self.sp = self.sp.wrapping_sub(2);
        addr
    }
}
