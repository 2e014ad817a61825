// =============================================================================
// myOS - Architecture Abstraction
// =============================================================================
//
// Re-exports the current architecture's code. Only 32-bit x86 is supported:
// multiboot v1 hands over control in 32-bit protected mode and this kernel
// never leaves it.
// =============================================================================

#[cfg(target_arch = "x86")]
pub mod x86;

#[cfg(target_arch = "x86")]
pub use x86::*;
