//! Kernel logging subsystem.
//!
//! Installs a `log` backend that writes one colored line per record to the
//! COM1 serial port:
//!
//! ```text
//! [ INFO] kernel: boot report rendered
//! ```
//!
//! `print!`/`println!` bypass the level filter for banners.
#![cfg_attr(not(test), no_std)]

use core::fmt;

use log::{Level, LevelFilter, Log, Metadata, Record};

const RESET: &str = "\x1b[0m";

/// Fixed-width label for a level.
pub fn label(level: Level) -> &'static str {
    match level {
        Level::Trace => "TRACE",
        Level::Debug => "DEBUG",
        Level::Info => " INFO",
        Level::Warn => " WARN",
        Level::Error => "ERROR",
    }
}

/// ANSI color escape for a level.
pub fn color(level: Level) -> &'static str {
    match level {
        Level::Trace => "\x1b[90m", // Gray
        Level::Debug => "\x1b[36m", // Cyan
        Level::Info => "\x1b[32m",  // Green
        Level::Warn => "\x1b[33m",  // Yellow
        Level::Error => "\x1b[31m", // Red
    }
}

/// Writes `record` as one line into `out`.
pub fn format_record(out: &mut impl fmt::Write, record: &Record<'_>) -> fmt::Result {
    let level = record.level();
    writeln!(
        out,
        "{}[{}]{} {}: {}",
        color(level),
        label(level),
        RESET,
        record.target(),
        record.args()
    )
}

struct SerialWriter;

impl fmt::Write for SerialWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        khal::serial::write_str(s);
        Ok(())
    }
}

/// The serial-backed `log` implementation.
pub struct KernelLogger;

static LOGGER: KernelLogger = KernelLogger;

impl Log for KernelLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            let _ = format_record(&mut SerialWriter, record);
        }
    }

    fn flush(&self) {}
}

/// Initialize the serial port and install the logger.
///
/// Returns whether the UART responded. Only the first call installs the
/// logger; later calls just adjust the level.
pub fn init(level: LevelFilter) -> bool {
    let serial_ok = khal::serial::init();
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
    serial_ok
}

/// Print to serial without formatting
pub fn print(args: fmt::Arguments) {
    khal::serial::write_fmt(args);
}

/// Print without newline
#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => {
        $crate::print(format_args!($($arg)*))
    };
}

/// Print with newline
#[macro_export]
macro_rules! println {
    () => ($crate::print!("\n"));
    ($($arg:tt)*) => {{
        $crate::print(format_args!($($arg)*));
        $crate::print(format_args!("\n"));
    }};
}
