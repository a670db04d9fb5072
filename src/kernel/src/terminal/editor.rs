//! Line editor.
//!
//! Owns the pending input line and the echo cursor. Characters are echoed
//! as they are accepted; a newline hands the finished line back to the
//! caller and starts a fresh one.

use super::scancode::BACKSPACE;
use super::screen::{Position, Screen};
use crate::config::{GRID_HEIGHT, GRID_WIDTH, INPUT_CAPACITY, PROMPT_INDENT};
use core::fmt;
use log::{trace, warn};
use marsh_common::ColorCode;
use marsh_hal::TextSurface;

/// Longest line the editor will hold. One slot stays free for the
/// terminator.
pub const MAX_LINE_LENGTH: usize = INPUT_CAPACITY - 1;

/// A completed input line.
#[derive(Clone, PartialEq, Eq)]
pub struct Line {
    bytes: [u8; INPUT_CAPACITY],
    len: usize,
}

impl Line {
    fn from_bytes(source: &[u8]) -> Self {
        let len = source.len().min(MAX_LINE_LENGTH);
        let mut bytes = [0; INPUT_CAPACITY];
        bytes[..len].copy_from_slice(&source[..len]);
        Self { bytes, len }
    }

    /// Raw line content, without terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Line content as text.
    pub fn as_str(&self) -> &str {
        // The editor only stores ASCII.
        core::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    /// Number of characters in the line.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true for a line with no characters.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Line").field(&self.as_str()).finish()
    }
}

/// Result of feeding one character to the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    /// Character consumed, line still open.
    None,
    /// Enter was pressed; carries the finished line.
    Completed(Line),
    /// Buffer full; the character was dropped.
    Overflowed,
}

/// Line editor state.
pub struct LineEditor {
    /// Pending input.
    buffer: [u8; INPUT_CAPACITY],
    /// Number of bytes in `buffer`.
    len: usize,
    /// Cell where the next echoed character goes.
    cursor: Position,
    /// Attribute used for echo.
    attribute: ColorCode,
}

impl LineEditor {
    /// Creates an empty editor with the cursor just after the prompt on
    /// row 0.
    pub const fn new(attribute: ColorCode) -> Self {
        Self::with_cursor(Position::new(PROMPT_INDENT, 0), attribute)
    }

    /// Creates an empty editor with the cursor at `cursor`.
    pub const fn with_cursor(cursor: Position, attribute: ColorCode) -> Self {
        Self {
            buffer: [0; INPUT_CAPACITY],
            len: 0,
            cursor,
            attribute,
        }
    }

    /// Feeds one character.
    pub fn accept<S: TextSurface>(&mut self, ch: char, screen: &mut Screen<S>) -> LineEvent {
        match ch {
            '\n' | '\r' => LineEvent::Completed(self.complete()),
            BACKSPACE | '\x7f' => {
                self.backspace(screen);
                LineEvent::None
            }
            ch if !ch.is_ascii() => LineEvent::None,
            ch => self.insert(ch as u8, screen),
        }
    }

    /// Pending input.
    pub fn input(&self) -> &str {
        core::str::from_utf8(&self.buffer[..self.len]).unwrap_or_default()
    }

    /// Number of pending characters.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true when nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Cell where the next echoed character goes.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    fn complete(&mut self) -> Line {
        let line = Line::from_bytes(&self.buffer[..self.len]);
        self.buffer = [0; INPUT_CAPACITY];
        self.len = 0;

        self.cursor.column = PROMPT_INDENT;
        self.cursor.row = (self.cursor.row + 1) % GRID_HEIGHT;
        line
    }

    fn backspace<S: TextSurface>(&mut self, screen: &mut Screen<S>) {
        if self.len == 0 {
            return;
        }
        self.len -= 1;
        self.buffer[self.len] = 0;

        if self.cursor.column > PROMPT_INDENT {
            self.cursor.column -= 1;
        } else {
            // Wraps below the indent on every row, so continuation rows
            // skip columns 0 and 1. Row 0 wraps to the bottom, like the
            // display does going down.
            self.cursor.column = GRID_WIDTH - 1;
            self.cursor.row = self.cursor.row.checked_sub(1).unwrap_or(GRID_HEIGHT - 1);
        }
        let Position { column, row } = self.cursor;
        if let Err(e) = screen.put(column, row, b' ', self.attribute) {
            warn!("backspace: {}", e);
        }
    }

    fn insert<S: TextSurface>(&mut self, byte: u8, screen: &mut Screen<S>) -> LineEvent {
        if self.len >= MAX_LINE_LENGTH {
            return LineEvent::Overflowed;
        }
        self.buffer[self.len] = byte;
        self.len += 1;

        let mut glyph = [0u8; 4];
        let glyph = char::from(byte).encode_utf8(&mut glyph);
        screen.write_text(glyph, self.cursor.column, self.cursor.row, self.attribute);
        self.cursor.advance();

        trace!("echo {:#04x} at {:?}", byte, self.cursor);
        LineEvent::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::MemorySurface;

    fn setup() -> (LineEditor, Screen<MemorySurface>) {
        (
            LineEditor::new(ColorCode::DEFAULT),
            Screen::new(MemorySurface::new()),
        )
    }

    fn feed(editor: &mut LineEditor, screen: &mut Screen<MemorySurface>, text: &str) -> LineEvent {
        let mut last = LineEvent::None;
        for ch in text.chars() {
            last = editor.accept(ch, screen);
        }
        last
    }

    #[test]
    fn test_completed_line_resets_buffer() {
        let (mut editor, mut screen) = setup();

        let mut completed = 0;
        for ch in "help\n".chars() {
            match editor.accept(ch, &mut screen) {
                LineEvent::Completed(line) => {
                    completed += 1;
                    assert_eq!(line.as_str(), "help");
                    assert_eq!(line.len(), 4);
                    assert_eq!(editor.len(), 0);
                    assert!(editor.input().is_empty());
                }
                event => assert_eq!(event, LineEvent::None),
            }
        }
        assert_eq!(completed, 1);
    }

    #[test]
    fn test_echo_follows_cursor() {
        let (mut editor, mut screen) = setup();
        feed(&mut editor, &mut screen, "ls");

        assert_eq!(screen.surface().cell(2, 0), (b'l', 0x07));
        assert_eq!(screen.surface().cell(3, 0), (b's', 0x07));
        assert_eq!(editor.cursor(), Position::new(4, 0));
        assert_eq!(editor.input(), "ls");
    }

    #[test]
    fn test_newline_moves_to_prompt_indent_of_next_row() {
        let (mut editor, mut screen) = setup();
        feed(&mut editor, &mut screen, "abc\n");
        assert_eq!(editor.cursor(), Position::new(PROMPT_INDENT, 1));
    }

    #[test]
    fn test_empty_line_completes() {
        let (mut editor, mut screen) = setup();
        match editor.accept('\n', &mut screen) {
            LineEvent::Completed(line) => assert!(line.is_empty()),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_overflow_on_256th_character() {
        let (mut editor, mut screen) = setup();

        let mut overflows = 0;
        for i in 0..INPUT_CAPACITY {
            match editor.accept('x', &mut screen) {
                LineEvent::Overflowed => {
                    overflows += 1;
                    assert_eq!(i, INPUT_CAPACITY - 1);
                }
                event => assert_eq!(event, LineEvent::None),
            }
        }
        assert_eq!(overflows, 1);
        assert_eq!(editor.len(), 255);

        let cursor = editor.cursor();
        assert_eq!(editor.accept('y', &mut screen), LineEvent::Overflowed);
        assert_eq!(editor.len(), 255);
        assert_eq!(editor.cursor(), cursor);
        assert!(!editor.input().contains('y'));
    }

    #[test]
    fn test_backspace_on_empty_line_is_noop() {
        let (mut editor, mut screen) = setup();
        let cursor = editor.cursor();

        assert_eq!(editor.accept(BACKSPACE, &mut screen), LineEvent::None);
        assert_eq!(editor.cursor(), cursor);
        assert_eq!(editor.len(), 0);
        assert_eq!(screen.surface().writes(), 0);
    }

    #[test]
    fn test_backspace_erases_last_character() {
        let (mut editor, mut screen) = setup();
        feed(&mut editor, &mut screen, "cat");
        editor.accept(BACKSPACE, &mut screen);

        assert_eq!(editor.input(), "ca");
        assert_eq!(editor.cursor(), Position::new(4, 0));
        assert_eq!(screen.surface().cell(4, 0).0, b' ');

        match feed(&mut editor, &mut screen, "r\n") {
            LineEvent::Completed(line) => assert_eq!(line.as_str(), "car"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_echo_wraps_to_next_row() {
        let mut editor = LineEditor::with_cursor(Position::new(79, 3), ColorCode::DEFAULT);
        let mut screen = Screen::new(MemorySurface::new());

        editor.accept('a', &mut screen);
        assert_eq!(screen.surface().cell(79, 3).0, b'a');
        assert_eq!(editor.cursor(), Position::new(0, 4));

        editor.accept('b', &mut screen);
        assert_eq!(screen.surface().cell(0, 4).0, b'b');
    }

    #[test]
    fn test_backspace_at_prompt_indent_wraps_to_previous_row() {
        let mut editor = LineEditor::with_cursor(Position::new(PROMPT_INDENT, 3), ColorCode::DEFAULT);
        let mut screen = Screen::new(MemorySurface::new());

        editor.accept('a', &mut screen);
        editor.accept(BACKSPACE, &mut screen);
        assert_eq!(editor.cursor(), Position::new(PROMPT_INDENT, 3));

        // Continuation rows start at column 0, below the indent.
        let mut editor = LineEditor::with_cursor(Position::new(79, 3), ColorCode::DEFAULT);
        feed(&mut editor, &mut screen, "ab");
        assert_eq!(editor.cursor(), Position::new(1, 4));

        editor.accept(BACKSPACE, &mut screen);
        assert_eq!(editor.cursor(), Position::new(79, 3));
        assert_eq!(screen.surface().cell(79, 3).0, b' ');
        assert_eq!(editor.len(), 1);

        editor.accept(BACKSPACE, &mut screen);
        assert_eq!(editor.cursor(), Position::new(78, 3));
        assert!(editor.is_empty());
    }

    #[test]
    fn test_backspace_past_row_zero_wraps_to_bottom() {
        let mut editor = LineEditor::with_cursor(Position::new(0, 0), ColorCode::DEFAULT);
        let mut screen = Screen::new(MemorySurface::new());
        feed(&mut editor, &mut screen, "zz");
        assert_eq!(editor.cursor(), Position::new(2, 0));

        editor.accept(BACKSPACE, &mut screen);
        assert_eq!(editor.cursor(), Position::new(79, 24));
        assert_eq!(screen.surface().cell(79, 24), (b' ', 0x07));
        assert_eq!(editor.len(), 1);
    }

    #[test]
    fn test_newline_on_bottom_row_wraps_to_top() {
        let mut editor = LineEditor::with_cursor(Position::new(5, 24), ColorCode::DEFAULT);
        let mut screen = Screen::new(MemorySurface::new());

        match editor.accept('\n', &mut screen) {
            LineEvent::Completed(line) => assert!(line.is_empty()),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(editor.cursor(), Position::new(PROMPT_INDENT, 0));
    }

    #[test]
    fn test_echo_in_last_cell_wraps_to_top() {
        let mut editor = LineEditor::with_cursor(Position::new(79, 24), ColorCode::DEFAULT);
        let mut screen = Screen::new(MemorySurface::new());

        editor.accept('a', &mut screen);
        assert_eq!(screen.surface().cell(79, 24), (b'a', 0x07));
        assert_eq!(editor.cursor(), Position::new(0, 0));

        editor.accept('b', &mut screen);
        assert_eq!(screen.surface().cell(0, 0), (b'b', 0x07));
        assert_eq!(editor.cursor(), Position::new(1, 0));
    }

    #[test]
    fn test_backspace_blanks_through_bounds_checked_put() {
        let (mut editor, mut screen) = setup();
        feed(&mut editor, &mut screen, "ab");
        let writes = screen.surface().writes();

        editor.accept(BACKSPACE, &mut screen);
        assert_eq!(screen.surface().writes(), writes + 1);
        assert_eq!(screen.surface().cell(3, 0), (b' ', 0x07));
        assert_eq!(screen.surface().cell(2, 0), (b'a', 0x07));
    }

    #[test]
    fn test_non_ascii_is_ignored() {
        let (mut editor, mut screen) = setup();
        assert_eq!(editor.accept('ß', &mut screen), LineEvent::None);
        assert!(editor.is_empty());
        assert_eq!(screen.surface().writes(), 0);
    }
}
