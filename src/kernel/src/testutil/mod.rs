//! Test infrastructure for the Marsh OS kernel.
//!
//! - [`sim`]: simulated keyboard controller and display grid, used by the
//!   unit tests, the boot self checks and the QEMU tests.
//! - QEMU support for bare-metal test binaries in `tests/`:
//!
//! ```rust,ignore
//! use marsh_kernel::testutil::{QemuExitCode, exit_qemu, test_runner, Testable};
//! ```

mod sim;

pub use sim::{keystrokes, MemorySurface, ScriptedKeyboard};

#[cfg(target_arch = "x86_64")]
use crate::serial_println;

/// QEMU exit codes for signaling test results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum QemuExitCode {
    /// All tests passed.
    Success = 0x10,
    /// One or more tests failed.
    Failed = 0x11,
}

/// Exit QEMU with the given exit code.
///
/// Uses the isa-debug-exit device configured on port 0xf4. QEMU reports
/// `(value << 1) | 1`, so `Success` exits with 33 (the bootimage
/// `test-success-exit-code`).
#[cfg(target_arch = "x86_64")]
pub fn exit_qemu(exit_code: QemuExitCode) {
    use x86_64::instructions::port::Port;

    // SAFETY: Writing to the isa-debug-exit device port is safe when QEMU
    // is configured with this device. It triggers a QEMU exit.
    unsafe {
        let mut port = Port::new(0xf4);
        port.write(exit_code as u32);
    }
}

/// Trait for types that can be run as tests.
pub trait Testable {
    /// Run the test and report results.
    fn run(&self);
}

#[cfg(target_arch = "x86_64")]
impl<T: Fn()> Testable for T {
    fn run(&self) {
        serial_println!("test {} ... ", core::any::type_name::<T>());
        self();
        serial_println!("[ok]");
    }
}

/// Custom test runner for bare-metal tests.
///
/// ```rust,ignore
/// #![feature(custom_test_frameworks)]
/// #![test_runner(marsh_kernel::testutil::test_runner)]
/// ```
#[cfg(target_arch = "x86_64")]
pub fn test_runner(tests: &[&dyn Testable]) {
    serial_println!("Running {} tests", tests.len());
    for test in tests {
        test.run();
    }
    exit_qemu(QemuExitCode::Success);
}

/// Panic handler for test binaries: reports the failure and exits QEMU.
#[cfg(target_arch = "x86_64")]
pub fn test_panic_handler(info: &core::panic::PanicInfo) -> ! {
    serial_println!("[failed]");
    serial_println!("Error: {}", info);
    exit_qemu(QemuExitCode::Failed);
    crate::arch::x86_64::halt_loop()
}
