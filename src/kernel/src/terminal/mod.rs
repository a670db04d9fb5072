//! Terminal subsystem for Marsh OS.
//!
//! Turns polled keyboard scancodes into commands on the text display.
//!
//! # Architecture
//!
//! - `scancode`: raw scancode to character translation
//! - `screen`: character grid writer
//! - `editor`: input line buffer and echo cursor
//! - `commands`: built-in shell commands
//! - `session`: the input loop tying them together

pub mod commands;
pub mod editor;
pub mod scancode;
pub mod screen;
pub mod session;

pub use commands::{dispatch, Command};
pub use editor::{Line, LineEditor, LineEvent};
pub use scancode::translate;
pub use screen::{Position, Screen};
pub use session::Console;
