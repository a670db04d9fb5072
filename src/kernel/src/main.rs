//! Marsh OS Kernel Entry Point
//!
//! Sets up logging, runs the console self checks and hands the keyboard
//! and screen to the console, which never returns.

#![no_std]
#![no_main]

use bootloader::{entry_point, BootInfo};
use core::panic::PanicInfo;
use log::{info, LevelFilter};
use marsh_common::{Color, ColorCode};
use marsh_kernel::arch::x86_64::{self, Ps2Controller, VgaBuffer};
use marsh_kernel::config::{ConsoleConfig, STATUS_ROW};
use marsh_kernel::terminal::{Console, Screen};
use marsh_kernel::{logger, selftest, serial_println};

entry_point!(kernel_main);

/// Kernel entry point.
///
/// Called by the bootloader after setting up the initial environment.
fn kernel_main(_boot_info: &'static BootInfo) -> ! {
    marsh_kernel::init();

    if let Err(e) = logger::init(LevelFilter::Debug) {
        serial_println!("logger unavailable: {}", e);
    }
    info!("Marsh OS v{}", env!("CARGO_PKG_VERSION"));

    selftest::run_all();

    let mut config = ConsoleConfig::default();
    if cfg!(feature = "status-line") {
        config = config.with_status_line();
    }

    // SAFETY: The console is the only user of the keyboard ports and of the
    // VGA buffer from here on.
    let (keyboard, display) = unsafe { (Ps2Controller::new(), VgaBuffer::new()) };
    let mut console = Console::new(keyboard, display, config);

    info!("console ready, waiting for Enter");
    console.welcome();
    console.run()
}

/// Panic handler.
///
/// Called when the kernel encounters an unrecoverable error.
#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    serial_println!("KERNEL PANIC: {}", info);

    // SAFETY: The console never runs again after a panic, so this is the
    // only live writer of the VGA buffer.
    let mut screen = Screen::new(unsafe { VgaBuffer::new() });
    screen.clear_row(STATUS_ROW);
    screen.write_text(
        "!!! KERNEL PANIC !!! (details on serial)",
        0,
        STATUS_ROW,
        ColorCode::new(Color::LightRed, Color::Black),
    );

    x86_64::halt_loop()
}
