//! Error types for Marsh OS.

use core::fmt;

/// Console setup and addressing errors.
///
/// Input handling itself never fails; these cover direct cell addressing
/// and one-time initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConsoleError {
    /// Cell coordinate outside the display grid
    CellOutOfRange {
        /// Requested column.
        column: usize,
        /// Requested row.
        row: usize,
    },
    /// A global logger was already installed
    LoggerAlreadySet,
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleError::CellOutOfRange { column, row } => {
                write!(f, "cell ({}, {}) is outside the display", column, row)
            }
            ConsoleError::LoggerAlreadySet => write!(f, "logger already initialized"),
        }
    }
}
