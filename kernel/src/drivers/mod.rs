// =============================================================================
// myOS - Kernel Drivers
// =============================================================================
//
//   console.rs - the VGA text console (memory-mapped grid + hardware cursor)
//
// Serial output lives in `khal::serial` and is reached through the logger.
// =============================================================================

pub mod console;
