//! Marsh OS Hardware Abstraction Layer (HAL) traits.
//!
//! This crate defines the capabilities the console core consumes, so the
//! same logic can drive real ports and VGA memory or a simulated device.

#![no_std]

/// Trait for a polled keyboard controller.
///
/// Mirrors the two single-byte registers of a PS/2 controller.
pub trait KeyboardController {
    /// Reads the status register. Bit 0 set means a byte is waiting.
    fn status(&mut self) -> u8;
    /// Reads the data register (a raw scancode).
    fn read_data(&mut self) -> u8;
}

/// Trait for a directly addressable character/attribute surface.
pub trait TextSurface {
    /// Stores `ch` with attribute `attr` in the cell at linear `index`
    /// (`row * width + column`).
    fn set_cell(&mut self, index: usize, ch: u8, attr: u8);
}
