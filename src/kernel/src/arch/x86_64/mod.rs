//! x86_64 architecture support.
//!
//! Provides the PS/2 keyboard controller, VGA text memory and the COM1
//! serial port used for logging.

pub mod keyboard;
pub mod serial;
pub mod vga;

pub use keyboard::Ps2Controller;
pub use vga::VgaBuffer;

/// Halts the CPU until the next interrupt.
#[inline]
pub fn hlt() {
    x86_64::instructions::hlt();
}

/// Halts the CPU in an infinite loop.
///
/// Used after unrecoverable errors (panics).
pub fn halt_loop() -> ! {
    loop {
        hlt();
    }
}
