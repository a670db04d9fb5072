//! PS/2 keyboard controller constants.

use bitflags::bitflags;

/// I/O port of the controller's data register.
pub const DATA_PORT: u16 = 0x60;

/// I/O port of the controller's status register.
pub const STATUS_PORT: u16 = 0x64;

/// Set 1 make code of the Enter key.
pub const SCANCODE_ENTER: u8 = 0x1C;

/// High bit of a set 1 scancode: set on key release.
pub const RELEASE_BIT: u8 = 0x80;

bitflags! {
    /// Bits of the controller status register.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct StatusFlags: u8 {
        const OUTPUT_FULL   = 1 << 0; // Data register holds a byte for us
        const INPUT_FULL    = 1 << 1;
        const SYSTEM        = 1 << 2;
        const COMMAND       = 1 << 3;
        const TIMEOUT_ERROR = 1 << 6;
        const PARITY_ERROR  = 1 << 7;
    }
}

impl StatusFlags {
    /// Returns true if a scancode can be read from the data register.
    pub fn data_ready(self) -> bool {
        self.contains(StatusFlags::OUTPUT_FULL)
    }
}

/// Returns true if `scancode` reports a key release.
pub const fn is_release(scancode: u8) -> bool {
    scancode & RELEASE_BIT != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_ready_uses_bit_zero_only() {
        assert!(StatusFlags::from_bits_truncate(0x01).data_ready());
        assert!(StatusFlags::from_bits_truncate(0x1d).data_ready());
        assert!(!StatusFlags::from_bits_truncate(0x1c).data_ready());
    }

    #[test]
    fn test_release_bit() {
        assert!(!is_release(SCANCODE_ENTER));
        assert!(is_release(SCANCODE_ENTER | RELEASE_BIT));
    }
}
