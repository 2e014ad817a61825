// =============================================================================
// myOS - Kernel Utilities
// =============================================================================
//
//   logger.rs - kprint!/kprintln! macros (serial output)
//   panic.rs  - panic handler (what happens when the kernel panics)
// =============================================================================

pub mod logger;
pub mod panic;
