//! Shared types for Marsh OS.
//!
//! Plain data used by both the console core and the hardware bindings:
//! VGA attributes, PS/2 controller constants and the console error type.

#![no_std]

pub mod color;
pub mod error;
pub mod keyboard;

pub use color::{Color, ColorCode};
pub use error::ConsoleError;
pub use keyboard::StatusFlags;
