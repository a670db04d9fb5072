//! Display surface writer.
//!
//! Renders text into the fixed 80x25 character grid. Text wraps at the
//! right edge and the row index wraps back to the top at the bottom edge;
//! the grid never scrolls.

use crate::config::{GRID_HEIGHT, GRID_WIDTH};
use marsh_common::{ColorCode, ConsoleError};
use marsh_hal::TextSurface;

/// Glyph written for characters outside ASCII.
const PLACEHOLDER: u8 = 0xfe;

/// A cell coordinate on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Column, `0..GRID_WIDTH`.
    pub column: usize,
    /// Row, `0..GRID_HEIGHT`.
    pub row: usize,
}

impl Position {
    /// Creates a position.
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// Folds an arbitrary coordinate onto the grid: excess columns spill
    /// into following rows, excess rows wrap to the top.
    pub const fn wrapped(column: usize, row: usize) -> Self {
        let row = (row % GRID_HEIGHT + (column / GRID_WIDTH) % GRID_HEIGHT) % GRID_HEIGHT;
        Self {
            column: column % GRID_WIDTH,
            row,
        }
    }

    /// Moves to the start of the next row.
    pub fn next_row(&mut self) {
        self.column = 0;
        self.row = (self.row + 1) % GRID_HEIGHT;
    }

    /// Moves one column right, wrapping to the next row at the edge.
    pub fn advance(&mut self) {
        self.column += 1;
        if self.column >= GRID_WIDTH {
            self.next_row();
        }
    }

    /// Linear cell index, `row * GRID_WIDTH + column`.
    pub const fn index(self) -> usize {
        self.row * GRID_WIDTH + self.column
    }
}

/// Sole writer of a [`TextSurface`].
pub struct Screen<S> {
    surface: S,
}

impl<S: TextSurface> Screen<S> {
    /// Wraps a surface.
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    /// Returns the underlying surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Consumes the screen, returning the surface.
    pub fn into_inner(self) -> S {
        self.surface
    }

    /// Writes `text` starting at (`column`, `row`).
    ///
    /// `\n` moves to column 0 of the next row. Every other character fills
    /// one cell. Returns where the next character would go.
    pub fn write_text(&mut self, text: &str, column: usize, row: usize, attr: ColorCode) -> Position {
        let mut position = Position::wrapped(column, row);
        for ch in text.chars() {
            match ch {
                '\n' => position.next_row(),
                ch => {
                    let byte = if ch.is_ascii() { ch as u8 } else { PLACEHOLDER };
                    self.surface.set_cell(position.index(), byte, attr.raw());
                    position.advance();
                }
            }
        }
        position
    }

    /// Stores one cell, rejecting coordinates outside the grid.
    pub fn put(&mut self, column: usize, row: usize, byte: u8, attr: ColorCode) -> Result<(), ConsoleError> {
        if column >= GRID_WIDTH || row >= GRID_HEIGHT {
            return Err(ConsoleError::CellOutOfRange { column, row });
        }
        self.surface
            .set_cell(Position::new(column, row).index(), byte, attr.raw());
        Ok(())
    }

    /// Blanks a single row with the default attribute.
    pub fn clear_row(&mut self, row: usize) {
        debug_assert!(row < GRID_HEIGHT, "row index out of bounds");

        let start = row * GRID_WIDTH;
        for index in start..start + GRID_WIDTH {
            self.surface.set_cell(index, b' ', ColorCode::DEFAULT.raw());
        }
    }

    /// Blanks the entire grid. Cursor state is not touched.
    pub fn clear(&mut self) {
        for row in 0..GRID_HEIGHT {
            self.clear_row(row);
        }
    }
}
