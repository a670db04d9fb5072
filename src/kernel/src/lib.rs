//! Marsh OS Kernel
//!
//! A minimal text console for x86_64: it polls the PS/2 controller for
//! scancodes, echoes input to VGA text memory and runs a handful of
//! built-in commands.
//!
//! # Architecture
//!
//! - `terminal`: the input-to-command pipeline, hardware independent
//! - `arch`: platform code (VGA, keyboard controller, serial)
//! - `config`: grid geometry, fixed texts and console switches
//! - `logger`: `log` backend on the serial port
//! - `testutil`: simulated devices and QEMU test support
//!
//! # Safety
//!
//! This is a `#![no_std]` kernel. All unsafe code is documented with safety
//! invariants explaining why the usage is correct.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub mod arch;
pub mod config;
#[cfg(target_arch = "x86_64")]
pub mod logger;
#[cfg(target_arch = "x86_64")]
pub mod selftest;
pub mod terminal;
pub mod testutil;

/// Initializes core kernel subsystems.
///
/// Called early in the boot process, before the logger is installed.
pub fn init() {
    #[cfg(target_arch = "x86_64")]
    {
        arch::x86_64::serial::init();
    }
}
