//! Kernel logger.
//!
//! Routes the `log` facade to COM1. Records look like
//! `[DEBG] commands: dispatch "help" -> Help`.

use crate::serial_println;
use core::fmt;
use log::{Level, LevelFilter, Metadata, Record};
use marsh_common::ConsoleError;

struct SerialLogger;

static LOGGER: SerialLogger = SerialLogger;

struct PrettyLogLevel(Level);

struct PrettyModulePath<'a>(Option<&'a str>);

impl log::Log for SerialLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let level = PrettyLogLevel(record.level());
            let module = PrettyModulePath(record.module_path());
            serial_println!("[{level}] {module}{}", record.args());
        }
    }

    fn flush(&self) {}
}

impl fmt::Display for PrettyLogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self.0 {
            Level::Error => "ERRO",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBG",
            Level::Trace => "TRCE",
        })
    }
}

impl fmt::Display for PrettyModulePath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(path) = self.0 else {
            return Ok(());
        };
        match path.rsplit("::").next() {
            Some(last) if path != "marsh_kernel" => write!(f, "{last}: "),
            _ => Ok(()),
        }
    }
}

/// Installs the serial logger and sets the maximum level.
///
/// Fails if a logger is already installed.
pub fn init(level: LevelFilter) -> Result<(), ConsoleError> {
    log::set_logger(&LOGGER).map_err(|_| ConsoleError::LoggerAlreadySet)?;
    log::set_max_level(level);
    Ok(())
}
