//! 6502 processor status register (P).
//!
//! Seven independent condition-code bits held in a single byte with
//! named bit positions.

/// Carry flag - set if an operation resulted in carry/borrow.
pub const C: u8 = 0x01;

/// Zero flag - set if a result is zero.
pub const Z: u8 = 0x02;

/// Interrupt disable - when set, IRQ interrupts are ignored.
pub const I: u8 = 0x04;

/// Decimal mode - enables BCD arithmetic for ADC/SBC.
pub const D: u8 = 0x08;

/// Break flag - set when a BRK pushes the status byte.
pub const B: u8 = 0x10;

/// Overflow flag - set if signed arithmetic overflowed.
pub const V: u8 = 0x40;

/// Negative flag - set if a result has bit 7 set.
pub const N: u8 = 0x80;

/// Processor status register.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Status(pub u8);

impl Status {
    /// Create a status register with every flag clear (reset state).
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Create status from a raw byte.
    #[must_use]
    pub const fn from_byte(value: u8) -> Self {
        Self(value)
    }

    /// Raw byte value.
    #[must_use]
    pub const fn to_byte(self) -> u8 {
        self.0
    }

    /// Check if a flag is set.
    #[must_use]
    pub const fn is_set(self, flag: u8) -> bool {
        self.0 & flag != 0
    }

    /// Set a flag.
    pub fn set(&mut self, flag: u8) {
        self.0 |= flag;
    }

    /// Clear a flag.
    pub fn clear(&mut self, flag: u8) {
        self.0 &= !flag;
    }

    /// Set or clear a flag based on condition.
    pub fn set_if(&mut self, flag: u8, condition: bool) {
        if condition {
            self.set(flag);
        } else {
            self.clear(flag);
        }
    }

    /// Update N and Z flags based on a value. No other flags change.
    pub fn update_nz(&mut self, value: u8) {
        self.set_if(N, value & 0x80 != 0);
        self.set_if(Z, value == 0);
    }
}
