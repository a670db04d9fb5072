//! Console configuration.
//!
//! Geometry and fixed texts are compile-time constants; the few behavior
//! switches live in [`ConsoleConfig`].

use marsh_common::ColorCode;

/// Number of columns in the display grid.
pub const GRID_WIDTH: usize = 80;

/// Number of rows in the display grid.
pub const GRID_HEIGHT: usize = 25;

/// Capacity of the input line buffer, including the terminator slot.
pub const INPUT_CAPACITY: usize = 256;

/// Prompt drawn at column 0 of every input row.
pub const PROMPT: &str = "> ";

/// First column available to user input on a prompt row.
pub const PROMPT_INDENT: usize = PROMPT.len();

/// Row where the dispatcher echoes each command.
pub const DEBUG_ROW: usize = 23;

/// Row used for status messages when signals are surfaced.
pub const STATUS_ROW: usize = 24;

/// Welcome screen text.
pub const GREETING: &str = "Welcome to Marsh OS\nPress ENTER to continue...";

/// Column and row where the greeting starts.
pub const GREETING_ORIGIN: (usize, usize) = (10, 5);

/// Runtime switches for the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Attribute used for echoed input, the prompt and command output.
    pub attribute: ColorCode,
    /// Report dropped input and unimplemented commands on [`STATUS_ROW`].
    ///
    /// Off by default: both conditions are silent.
    pub surface_signals: bool,
}

impl ConsoleConfig {
    /// Default configuration: light gray text, silent signals.
    pub const fn new() -> Self {
        Self {
            attribute: ColorCode::DEFAULT,
            surface_signals: false,
        }
    }

    /// Enables the status line.
    pub const fn with_status_line(mut self) -> Self {
        self.surface_signals = true;
        self
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::new()
    }
}
