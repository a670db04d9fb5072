//! Polled PS/2 keyboard controller.

use marsh_common::keyboard::{DATA_PORT, STATUS_PORT};
use marsh_hal::KeyboardController;
use x86_64::instructions::port::PortReadOnly;

/// The i8042 controller's status and data registers.
pub struct Ps2Controller {
    status: PortReadOnly<u8>,
    data: PortReadOnly<u8>,
}

impl Ps2Controller {
    /// Binds the controller at its standard ports.
    ///
    /// # Safety
    ///
    /// The caller must be the only reader of ports 0x60 and 0x64; a
    /// second reader would steal scancodes.
    pub const unsafe fn new() -> Self {
        Self {
            status: PortReadOnly::new(STATUS_PORT),
            data: PortReadOnly::new(DATA_PORT),
        }
    }
}

impl KeyboardController for Ps2Controller {
    fn status(&mut self) -> u8 {
        // SAFETY: Reading the status register has no side effects.
        unsafe { self.status.read() }
    }

    fn read_data(&mut self) -> u8 {
        // SAFETY: Port 0x60 is the controller's output buffer; `new`
        // guarantees we are its only reader.
        unsafe { self.data.read() }
    }
}
