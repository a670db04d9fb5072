//! Simulated keyboard and display.
//!
//! Stand-ins for the PS/2 controller and VGA memory so the console can be
//! driven without hardware.

use crate::config::{GRID_HEIGHT, GRID_WIDTH};
use crate::terminal::scancode::scancode_for;
use marsh_common::keyboard::RELEASE_BIT;
use marsh_common::StatusFlags;
use marsh_hal::{KeyboardController, TextSurface};

const CELLS: usize = GRID_WIDTH * GRID_HEIGHT;

/// In-memory 80x25 character grid.
///
/// Starts as spaces with attribute 0, which no console write produces, so
/// untouched cells are easy to tell apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySurface {
    chars: [u8; CELLS],
    attrs: [u8; CELLS],
    writes: usize,
}

impl MemorySurface {
    /// Creates a blank surface.
    pub const fn new() -> Self {
        Self {
            chars: [b' '; CELLS],
            attrs: [0; CELLS],
            writes: 0,
        }
    }

    /// Character and attribute at (`column`, `row`).
    pub fn cell(&self, column: usize, row: usize) -> (u8, u8) {
        let index = row * GRID_WIDTH + column;
        (self.chars[index], self.attrs[index])
    }

    /// `len` characters starting at (`column`, `row`), in memory order.
    pub fn text(&self, column: usize, row: usize, len: usize) -> &[u8] {
        let start = row * GRID_WIDTH + column;
        &self.chars[start..start + len]
    }

    /// Returns true if row `row` begins with `text`.
    pub fn row_starts_with(&self, row: usize, text: &str) -> bool {
        text.len() <= GRID_WIDTH && self.text(0, row, text.len()) == text.as_bytes()
    }

    /// Returns true if row `row` holds only spaces.
    pub fn row_is_blank(&self, row: usize) -> bool {
        self.text(0, row, GRID_WIDTH).iter().all(|&byte| byte == b' ')
    }

    /// Number of `set_cell` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSurface for MemorySurface {
    fn set_cell(&mut self, index: usize, ch: u8, attr: u8) {
        debug_assert!(index < CELLS, "cell index out of bounds");
        if let (Some(c), Some(a)) = (self.chars.get_mut(index), self.attrs.get_mut(index)) {
            *c = ch;
            *a = attr;
            self.writes += 1;
        }
    }
}

/// Keyboard controller replaying a fixed scancode sequence.
///
/// The status register reports data while scancodes remain. Reading past
/// the end returns 0, like an idle data register.
#[derive(Debug, Clone)]
pub struct ScriptedKeyboard<'a> {
    script: &'a [u8],
    position: usize,
    status_reads: usize,
}

impl<'a> ScriptedKeyboard<'a> {
    /// Creates a keyboard that will deliver `script` in order.
    pub const fn new(script: &'a [u8]) -> Self {
        Self {
            script,
            position: 0,
            status_reads: 0,
        }
    }

    /// Scancodes not yet read.
    pub fn remaining(&self) -> usize {
        self.script.len() - self.position
    }

    /// Returns true once every scancode was read.
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Number of status register reads so far.
    pub fn status_reads(&self) -> usize {
        self.status_reads
    }
}

impl KeyboardController for ScriptedKeyboard<'_> {
    fn status(&mut self) -> u8 {
        self.status_reads += 1;
        // Bit 2 is set on a booted controller; only bit 0 means data.
        let mut status = StatusFlags::SYSTEM;
        if !self.is_exhausted() {
            status |= StatusFlags::OUTPUT_FULL;
        }
        status.bits()
    }

    fn read_data(&mut self) -> u8 {
        match self.script.get(self.position) {
            Some(&scancode) => {
                self.position += 1;
                scancode
            }
            None => 0,
        }
    }
}

/// Encodes `text` as make/break scancode pairs into `out`.
///
/// Characters without a key are skipped. Returns the filled prefix of
/// `out`; encoding stops when `out` is full.
pub fn keystrokes<'a>(text: &str, out: &'a mut [u8]) -> &'a [u8] {
    let mut len = 0;
    for scancode in text.chars().filter_map(scancode_for) {
        if len + 2 > out.len() {
            break;
        }
        out[len] = scancode;
        out[len + 1] = scancode | RELEASE_BIT;
        len += 2;
    }
    &out[..len]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_keyboard_reports_ready_until_drained() {
        let mut keyboard = ScriptedKeyboard::new(&[0x1e, 0x9e]);

        assert!(StatusFlags::from_bits_truncate(keyboard.status()).data_ready());
        assert_eq!(keyboard.read_data(), 0x1e);
        assert_eq!(keyboard.read_data(), 0x9e);
        assert!(keyboard.is_exhausted());
        assert!(!StatusFlags::from_bits_truncate(keyboard.status()).data_ready());
        assert_eq!(keyboard.read_data(), 0);
        assert_eq!(keyboard.status_reads(), 2);
    }

    #[test]
    fn test_keystrokes_pairs_make_and_break() {
        let mut buf = [0u8; 16];
        assert_eq!(keystrokes("ab\n", &mut buf), &[0x1e, 0x9e, 0x30, 0xb0, 0x1c, 0x9c]);

        let mut small = [0u8; 3];
        assert_eq!(keystrokes("ab", &mut small), &[0x1e, 0x9e]);

        let mut buf = [0u8; 4];
        assert_eq!(keystrokes("A", &mut buf), &[] as &[u8]);
    }

    #[test]
    fn test_memory_surface_counts_writes() {
        let mut surface = MemorySurface::new();
        surface.set_cell(81, b'k', 0x07);
        assert_eq!(surface.cell(1, 1), (b'k', 0x07));
        assert!(surface.row_starts_with(1, " k"));
        assert!(surface.row_is_blank(0));
        assert_eq!(surface.writes(), 1);
    }
}
