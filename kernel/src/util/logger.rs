// =============================================================================
// myOS - Kernel Print Macros (kprint! / kprintln!)
// =============================================================================
//
// Unfiltered formatted output to COM1 for banners and the panic handler.
// Leveled messages go through the `log` macros instead (log::info!, ...),
// which `klog` routes to the same port with a level prefix.
//
// The VGA console is NOT a sink here: it belongs to kmain() and shows only
// the boot report.
//
// USAGE:
//   kprintln!("myOS v{}", env!("CARGO_PKG_VERSION"));
//   kprint!("no newline");
// =============================================================================

/// Prints formatted text to the serial console.
#[macro_export]
macro_rules! kprint {
    ($($arg:tt)*) => {
        ::klog::print(format_args!($($arg)*))
    };
}

/// Prints formatted text followed by a newline to the serial console.
#[macro_export]
macro_rules! kprintln {
    () => {
        $crate::kprint!("\n")
    };
    ($($arg:tt)*) => {
        $crate::kprint!("{}\n", format_args!($($arg)*))
    };
}
