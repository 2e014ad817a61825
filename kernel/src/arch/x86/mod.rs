// =============================================================================
// myOS - x86 (32-bit) Architecture Code
// =============================================================================
//
//   boot.rs - multiboot header, boot stack, `_start` entry stub
//   cpu.rs  - HLT-based idle and halt loops
// =============================================================================

pub mod boot;
pub mod cpu;
