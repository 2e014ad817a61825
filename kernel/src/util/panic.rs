// =============================================================================
// myOS - Kernel Panic Handler
// =============================================================================
//
// A panic means a kernel bug: the report and the cursor state machine are
// total, so nothing in normal operation panics.
//
// WHAT WE DO:
//   1. Print the panic message and location to serial
//   2. Disable interrupts and halt permanently
//
// The serial lock is bypassed: if the panic happened while it was held,
// taking it again would hang silently.
// =============================================================================

use crate::arch::cpu;
use core::fmt;
use core::panic::PanicInfo;

fn emergency_println(args: fmt::Arguments) {
    // SAFETY: single core, and the panicking context will never resume, so
    // no other writer can observe a torn line.
    unsafe {
        khal::serial::force_write_fmt(args);
        khal::serial::force_write_fmt(format_args!("\n"));
    }
}

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    emergency_println(format_args!(""));
    emergency_println(format_args!("=========================================================="));
    emergency_println(format_args!("  KERNEL PANIC - myOS"));
    emergency_println(format_args!("=========================================================="));

    if let Some(location) = info.location() {
        emergency_println(format_args!("  Location: {}:{}", location.file(), location.line()));
    } else {
        emergency_println(format_args!("  Location: <unknown>"));
    }

    emergency_println(format_args!("  Message: {}", info.message()));
    emergency_println(format_args!("  System halted. Reboot required."));

    cpu::halt_forever()
}
