// =============================================================================
// myOS - CPU Utilities (x86)
// =============================================================================
//
// Thin wrappers around HLT. The kernel has no scheduler: after the boot
// report the CPU just waits.
// =============================================================================

/// Halts the CPU until the next interrupt arrives.
#[inline(always)]
pub fn halt() {
    // SAFETY: HLT only stops instruction execution until an interrupt; it
    // touches no memory.
    unsafe {
        core::arch::asm!("hlt", options(nomem, nostack, preserves_flags));
    }
}

/// The kernel's final resting state after a successful boot.
///
/// Loops on HLT without touching the interrupt flag. Multiboot enters with
/// interrupts disabled and nothing here enables them, so in practice the
/// first HLT is the last instruction executed; the loop only guards against
/// an NMI waking the core.
pub fn idle_forever() -> ! {
    loop {
        halt();
    }
}

/// Halts the CPU in an unrecoverable state.
///
/// Disables interrupts and then halts. Used by the panic handler.
#[inline(always)]
pub fn halt_forever() -> ! {
    loop {
        // SAFETY: CLI + HLT in a loop ensures the CPU stays stopped.
        unsafe {
            core::arch::asm!("cli", "hlt", options(nomem, nostack));
        }
    }
}
