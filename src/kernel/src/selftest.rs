//! Boot-time console self checks.
//!
//! Drives the console against simulated devices before the real keyboard
//! and screen are handed over. Results go to the serial port.

use crate::config::{ConsoleConfig, DEBUG_ROW, INPUT_CAPACITY};
use crate::serial_println;
use crate::terminal::{translate, Command, Console, LineEvent};
use crate::testutil::{keystrokes, MemorySurface, ScriptedKeyboard};
use marsh_common::keyboard::SCANCODE_ENTER;

/// Runs all console self checks.
pub fn run_all() {
    serial_println!("Running console self checks...");

    check_translation();
    check_overflow();
    check_session();

    serial_println!("All console self checks passed!");
}

fn check_translation() {
    serial_println!("check_translation... ");
    assert_eq!(translate(0x23), Some('h'));
    assert_eq!(translate(0x23 | 0x80), None);
    assert_eq!(translate(0x2a), None);
    serial_println!("[ok]");
}

fn check_overflow() {
    serial_println!("check_overflow... ");
    let script = [0x2d; INPUT_CAPACITY];
    let mut console = Console::new(
        ScriptedKeyboard::new(&script),
        MemorySurface::new(),
        ConsoleConfig::default(),
    );

    let mut overflows = 0;
    while let Some(event) = console.poll() {
        if event == LineEvent::Overflowed {
            overflows += 1;
        }
    }
    assert_eq!(overflows, 1);
    assert_eq!(console.editor().len(), INPUT_CAPACITY - 1);
    serial_println!("[ok]");
}

fn check_session() {
    serial_println!("check_session... ");
    let mut script = [0u8; 32];
    script[0] = SCANCODE_ENTER;
    let typed = keystrokes("help\n", &mut script[1..]).len();

    let mut console = Console::new(
        ScriptedKeyboard::new(&script[..typed + 1]),
        MemorySurface::new(),
        ConsoleConfig::default(),
    );
    console.welcome();
    while !console.keyboard().is_exhausted() {
        console.poll();
    }

    let surface = console.screen().surface();
    assert!(surface.row_starts_with(0, "Available commands:"));
    assert!(surface.row_starts_with(DEBUG_ROW, "Command: help"));
    assert_eq!(Command::parse("help"), Command::Help);
    serial_println!("[ok]");
}
