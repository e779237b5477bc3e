//! Flat 64 KiB memory.

use crate::Bus;

/// Size of the address space (64 KiB).
pub const MAX_MEM: usize = 0x1_0000;

/// A flat 64 KiB byte store.
///
/// The store is pre-zeroed on construction and owns no other state.
/// It is created once by the driver, zeroed again during processor
/// reset, and mutated only through the [`Bus`] contract thereafter.
pub struct FlatMemory {
    data: [u8; MAX_MEM],
}

impl FlatMemory {
    /// Create a zeroed store.
    #[must_use]
    pub const fn new() -> Self {
        Self { data: [0; MAX_MEM] }
    }

    /// Set every address to zero.
    pub fn init(&mut self) {
        self.data.fill(0);
    }

    /// Copy bytes into the store starting at `address`, wrapping at the
    /// top of the address space.
    ///
    /// Stands in for a program loader, which is outside the core.
    pub fn load(&mut self, address: u16, bytes: &[u8]) {
        let mut addr = address;
        for &byte in bytes {
            self.data[addr as usize] = byte;
            addr = addr.wrapping_add(1);
        }
    }

    /// Read a byte without going through the bus (for inspection).
    #[must_use]
    pub const fn peek(&self, address: u16) -> u8 {
        self.data[address as usize]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for FlatMemory {
    fn read(&mut self, address: u16) -> u8 {
        self.data[address as usize]
    }

    fn write(&mut self, address: u16, value: u8) {
        self.data[address as usize] = value;
    }

    fn reset(&mut self) {
        self.init();
    }
}
