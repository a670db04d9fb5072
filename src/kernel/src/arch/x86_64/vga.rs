//! VGA text mode buffer for x86_64.
//!
//! Exposes the 80x25 text buffer at 0xB8000 as a [`TextSurface`].

use crate::config::{GRID_HEIGHT, GRID_WIDTH};
use core::ptr;
use marsh_common::ColorCode;
use marsh_hal::TextSurface;

/// VGA text buffer memory-mapped I/O address.
const VGA_BUFFER_ADDR: usize = 0xB8000;

/// A single character cell in the VGA buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
struct ScreenChar {
    ascii_character: u8,
    color_code: ColorCode,
}

/// The VGA text buffer layout.
#[repr(transparent)]
struct Buffer {
    chars: [[ScreenChar; GRID_WIDTH]; GRID_HEIGHT],
}

/// Handle to the VGA text buffer.
pub struct VgaBuffer {
    /// SAFETY: valid for the kernel's lifetime; the VGA buffer at 0xB8000
    /// is always mapped on x86 hardware and in QEMU.
    buffer: *mut Buffer,
}

// SAFETY: VgaBuffer only accesses the VGA buffer through volatile
// operations, and `new` requires a single owner.
unsafe impl Send for VgaBuffer {}

impl VgaBuffer {
    /// Creates a handle to the text buffer.
    ///
    /// # Safety
    ///
    /// At most one `VgaBuffer` may write at a time. The panic handler is
    /// the only place allowed to create a second one, after which the
    /// first is never used again.
    pub unsafe fn new() -> Self {
        VgaBuffer {
            buffer: VGA_BUFFER_ADDR as *mut Buffer,
        }
    }

    /// Reads back the character and attribute at linear `index`.
    pub fn cell(&self, index: usize) -> Option<(u8, u8)> {
        let (row, col) = (index / GRID_WIDTH, index % GRID_WIDTH);
        if row >= GRID_HEIGHT {
            return None;
        }
        // SAFETY: row < GRID_HEIGHT and col < GRID_WIDTH. Volatile because
        // the buffer is memory-mapped I/O.
        let cell = unsafe { ptr::read_volatile(&(*self.buffer).chars[row][col]) };
        Some((cell.ascii_character, cell.color_code.raw()))
    }
}

impl TextSurface for VgaBuffer {
    fn set_cell(&mut self, index: usize, ch: u8, attr: u8) {
        let (row, col) = (index / GRID_WIDTH, index % GRID_WIDTH);
        debug_assert!(row < GRID_HEIGHT, "cell index out of bounds");
        if row >= GRID_HEIGHT {
            return;
        }

        // SAFETY: We've verified row < GRID_HEIGHT above, and col is a
        // remainder of GRID_WIDTH. The buffer pointer was validated at
        // construction time. Using volatile write because the VGA buffer is
        // memory-mapped I/O that may be read by hardware at any time.
        unsafe {
            ptr::write_volatile(
                &mut (*self.buffer).chars[row][col],
                ScreenChar {
                    ascii_character: ch,
                    color_code: ColorCode::from_raw(attr),
                },
            );
        }
    }
}
