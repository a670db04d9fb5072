//! Console input loop.
//!
//! [`Console`] owns every piece of console state: the keyboard, the screen,
//! the line editor and the configuration. It runs in two phases. The
//! welcome phase shows a greeting and busy-polls the controller for an
//! Enter press. The command phase then polls forever, feeding translated
//! characters to the editor and dispatching completed lines.

use super::commands::dispatch;
use super::editor::{LineEditor, LineEvent};
use super::scancode::translate;
use super::screen::Screen;
use crate::config::{ConsoleConfig, GREETING, GREETING_ORIGIN, PROMPT, STATUS_ROW};
use log::{info, trace, warn};
use marsh_common::keyboard::SCANCODE_ENTER;
use marsh_common::{Color, ColorCode, StatusFlags};
use marsh_hal::{KeyboardController, TextSurface};

/// Status line text for a dropped character.
const OVERFLOW_NOTICE: &str = "Input line full; character dropped";

/// Status line text for a reserved command.
const UNIMPLEMENTED_NOTICE: &str = "Command not implemented";

/// Attribute of status line notices.
const NOTICE_ATTRIBUTE: ColorCode = ColorCode::new(Color::Yellow, Color::Black);

/// Console state and driver.
pub struct Console<K, S> {
    keyboard: K,
    screen: Screen<S>,
    editor: LineEditor,
    config: ConsoleConfig,
}

impl<K: KeyboardController, S: TextSurface> Console<K, S> {
    /// Creates a console over a keyboard controller and a display surface.
    pub fn new(keyboard: K, surface: S, config: ConsoleConfig) -> Self {
        Self {
            keyboard,
            screen: Screen::new(surface),
            editor: LineEditor::new(config.attribute),
            config,
        }
    }

    /// Runs the welcome phase.
    ///
    /// Draws the greeting and blocks until the controller delivers an Enter
    /// make code, then clears the screen and draws the first prompt.
    pub fn welcome(&mut self) {
        self.show_greeting();
        self.wait_for_enter();

        self.screen.clear();
        self.draw_prompt();
        info!("entering command phase");
    }

    /// Clears the screen and draws the greeting.
    pub fn show_greeting(&mut self) {
        self.screen.clear();
        let (column, row) = GREETING_ORIGIN;
        self.screen.write_text(GREETING, column, row, self.config.attribute);
    }

    /// Busy-polls until an Enter make code arrives. Other scancodes are
    /// consumed and discarded.
    pub fn wait_for_enter(&mut self) {
        while !self.enter_pressed() {
            core::hint::spin_loop();
        }
    }

    /// Runs the command phase. Never returns.
    pub fn run(&mut self) -> ! {
        loop {
            self.poll();
        }
    }

    /// One command phase iteration.
    ///
    /// Returns `None` if no character was available, otherwise what the
    /// editor made of it.
    pub fn poll(&mut self) -> Option<LineEvent> {
        let ch = self.read_character()?;
        let event = self.editor.accept(ch, &mut self.screen);

        match &event {
            LineEvent::Completed(line) => {
                let command = dispatch(line.as_str(), &mut self.screen, self.config.attribute);
                if command.is_unimplemented() {
                    self.notify(UNIMPLEMENTED_NOTICE);
                }
                self.draw_prompt();
            }
            LineEvent::Overflowed => {
                warn!("input line full, dropped {:?}", ch);
                self.notify(OVERFLOW_NOTICE);
            }
            LineEvent::None => {}
        }
        Some(event)
    }

    /// The screen.
    pub fn screen(&self) -> &Screen<S> {
        &self.screen
    }

    /// The line editor.
    pub fn editor(&self) -> &LineEditor {
        &self.editor
    }

    /// The keyboard controller.
    pub fn keyboard(&self) -> &K {
        &self.keyboard
    }

    fn data_ready(&mut self) -> bool {
        StatusFlags::from_bits_truncate(self.keyboard.status()).data_ready()
    }

    /// Reads the controller directly, bypassing translation.
    fn enter_pressed(&mut self) -> bool {
        self.data_ready() && self.keyboard.read_data() == SCANCODE_ENTER
    }

    fn read_character(&mut self) -> Option<char> {
        if !self.data_ready() {
            return None;
        }
        let scancode = self.keyboard.read_data();
        trace!("scancode {:#04x}", scancode);
        translate(scancode)
    }

    fn draw_prompt(&mut self) {
        let row = self.editor.cursor().row;
        self.screen.write_text(PROMPT, 0, row, self.config.attribute);
    }

    fn notify(&mut self, notice: &str) {
        if !self.config.surface_signals {
            return;
        }
        self.screen.clear_row(STATUS_ROW);
        self.screen.write_text(notice, 0, STATUS_ROW, NOTICE_ATTRIBUTE);
    }
}
