//! Memory bus interface.

use crate::Cycles;

/// Byte-addressable memory interface.
///
/// The processor accesses its store exclusively through this trait. The
/// 16-bit address type spans the store exactly, so every address is
/// valid by construction and no bounds errors exist.
pub trait Bus {
    /// Read the byte at the given address.
    fn read(&mut self, address: u16) -> u8;

    /// Write a byte to the given address.
    fn write(&mut self, address: u16, value: u8);

    /// Return the store to its power-on state (all zeroes).
    ///
    /// Any previously loaded program is gone afterwards; callers must
    /// reload memory contents.
    fn reset(&mut self);

    /// Write a 16-bit value across two consecutive addresses, low byte
    /// first, charging one cycle per byte write.
    ///
    /// The only cycle-aware bus operation: pushing a subroutine return
    /// address is two timed bus transactions.
    fn write_word(&mut self, cycles: &mut Cycles, value: u16, address: u16) {
        self.write(address, (value & 0xFF) as u8);
        self.write(address.wrapping_add(1), (value >> 8) as u8);
        cycles.spend(2);
    }
}
