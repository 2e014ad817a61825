// =============================================================================
// myOS - Build-time Configuration
// =============================================================================
//
// Everything tunable lives here as a constant. There is no command line and
// no config file: the kernel's behavior is fixed at compile time, with Cargo
// features selecting the logging setup.
//
//   serial-log (default) - bring up COM1 and install the `log` backend
//   verbose              - log at TRACE instead of INFO
// =============================================================================

use kboot::ReportConfig;
use kvga::{Color, ColorCode};

/// First line of the boot report.
pub const BANNER: &str = "myOS v0.1 - Minimal x86-32 Kernel";

/// Color of every report line, including the signature error.
pub const TEXT_COLOR: ColorCode = ColorCode::new(Color::LightGreen, Color::Black);

pub const REPORT: ReportConfig<'static> = ReportConfig {
    banner: BANNER,
    text: TEXT_COLOR,
};

/// Maximum level forwarded to the serial logger.
#[cfg(target_os = "none")]
pub const LOG_LEVEL: log::LevelFilter = if cfg!(feature = "verbose") {
    log::LevelFilter::Trace
} else {
    log::LevelFilter::Info
};
