//! Opcode constants and instruction decode.

/// LDA immediate - 2 cycles.
pub const LDA_IMM: u8 = 0xA9;

/// LDA zero page - 3 cycles.
pub const LDA_ZP: u8 = 0xA5;

/// LDA zero page,X - 4 cycles.
pub const LDA_ZPX: u8 = 0xB5;

/// JSR absolute - 6 cycles.
pub const JSR: u8 = 0x20;

/// A decoded instruction.
///
/// One variant per handled opcode. Decode returns `None` for any other
/// byte, so the dispatch match stays exhaustive and there is no
/// fallthrough between handlers by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Load accumulator with the next instruction byte.
    LdaImmediate,
    /// Load accumulator from a one-byte zero-page address.
    LdaZeroPage,
    /// Load accumulator from a zero-page address offset by X.
    LdaZeroPageX,
    /// Jump to subroutine, pushing the return address.
    Jsr,
}

impl Instruction {
    /// Decode one opcode byte.
    #[must_use]
    pub const fn decode(opcode: u8) -> Option<Self> {
        match opcode {
            LDA_IMM => Some(Self::LdaImmediate),
            LDA_ZP => Some(Self::LdaZeroPage),
            LDA_ZPX => Some(Self::LdaZeroPageX),
            JSR => Some(Self::Jsr),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_opcodes_decode() {
        assert_eq!(Instruction::decode(LDA_IMM), Some(Instruction::LdaImmediate));
        assert_eq!(Instruction::decode(LDA_ZP), Some(Instruction::LdaZeroPage));
        assert_eq!(Instruction::decode(LDA_ZPX), Some(Instruction::LdaZeroPageX));
        assert_eq!(Instruction::decode(JSR), Some(Instruction::Jsr));
    }

    #[test]
    fn everything_else_is_unhandled() {
        let handled = [LDA_IMM, LDA_ZP, LDA_ZPX, JSR];
        for opcode in 0..=0xFF_u8 {
            if !handled.contains(&opcode) {
                assert_eq!(Instruction::decode(opcode), None, "opcode ${opcode:02X}");
            }
        }
    }
}
