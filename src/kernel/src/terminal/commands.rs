//! Built-in shell commands.
//!
//! The command set is fixed. A completed line is matched exactly,
//! case-sensitive, against [`Command::TABLE`].

use super::screen::Screen;
use crate::config::DEBUG_ROW;
use log::{debug, warn};
use marsh_common::ColorCode;
use marsh_hal::TextSurface;

/// Label drawn before the echoed command on the debug row.
const ECHO_LABEL: &str = "Command: ";

/// Usage listing, one entry per row starting at row 0.
const HELP_LINES: [&str; 4] = [
    "Available commands:",
    "clear - Clear the screen\n",
    "reboot - Reboot the system\n",
    "about - Show information about the OS\n",
];

/// Version banner.
pub const ABOUT_TEXT: &str = "Marsh OS v0.0.1 by CO0K1E\n";

/// Reply to anything not in the table.
pub const UNKNOWN_TEXT: &str = "Unknown command\n";

/// Shell command types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Clear the screen.
    Clear,
    /// Display help information.
    Help,
    /// Show the version banner.
    About,
    /// Reserved. System reset is not implemented; accepted as a no-op.
    Reboot,
    /// Not a known command.
    Unknown,
}

impl Command {
    /// Name and command for every built-in.
    pub const TABLE: [(&'static str, Command); 4] = [
        ("clear", Command::Clear),
        ("help", Command::Help),
        ("about", Command::About),
        ("reboot", Command::Reboot),
    ];

    /// Parse a command from a completed line.
    pub fn parse(line: &str) -> Command {
        Self::TABLE
            .iter()
            .find(|(name, _)| *name == line)
            .map(|&(_, command)| command)
            .unwrap_or(Command::Unknown)
    }

    /// Returns true if the command does nothing yet.
    pub fn is_unimplemented(self) -> bool {
        matches!(self, Command::Reboot)
    }

    /// Execute a command.
    pub fn execute<S: TextSurface>(self, screen: &mut Screen<S>, attr: ColorCode) {
        match self {
            Command::Clear => screen.clear(),
            Command::Help => {
                for (row, line) in HELP_LINES.iter().enumerate() {
                    screen.write_text(line, 0, row, attr);
                }
            }
            Command::About => {
                screen.write_text(ABOUT_TEXT, 0, 0, attr);
            }
            Command::Reboot => warn!("reboot requested; system reset is not implemented"),
            Command::Unknown => {
                screen.write_text(UNKNOWN_TEXT, 0, 0, attr);
            }
        }
    }
}

/// Echoes `line` on the debug row, then runs the matching command.
///
/// Returns the command that ran.
pub fn dispatch<S: TextSurface>(line: &str, screen: &mut Screen<S>, attr: ColorCode) -> Command {
    let after_label = screen.write_text(ECHO_LABEL, 0, DEBUG_ROW, attr);
    screen.write_text(line, after_label.column, after_label.row, attr);

    let command = Command::parse(line);
    debug!("dispatch {:?} -> {:?}", line, command);
    command.execute(screen, attr);
    command
}
