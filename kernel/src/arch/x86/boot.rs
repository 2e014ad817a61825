// =============================================================================
// myOS - Multiboot v1 Entry
// =============================================================================
//
// THE HANDOFF:
//   A multiboot v1 loader finds MULTIBOOT_HEADER in the first 8 KiB of the
//   image, loads us at 1 MiB (see linker.ld) and jumps to `_start` with:
//     - 32-bit protected mode, paging off, flat segments
//     - interrupts disabled
//     - EAX = 0x2BADB002 (bootloader magic)
//     - EBX = physical address of the multiboot information structure
//     - NO usable stack
//
// `_start` therefore only installs a stack and forwards EAX/EBX to kmain()
// using the cdecl convention (arguments pushed right to left).
// =============================================================================

use core::arch::global_asm;

use kboot::{Header, HeaderFlags};

/// Size of the stack `_start` hands to kmain().
const BOOT_STACK_SIZE: usize = 16 * 1024;

/// Bytes `_start` skips before pushing kmain()'s two arguments, so ESP is
/// 16-byte aligned at the `call` as the i386 System V ABI requires.
const ENTRY_PADDING: usize = 8;
const KMAIN_ARGS_SIZE: usize = 2 * 4;

const _: () = assert!(BOOT_STACK_SIZE % 16 == 0);
const _: () = assert!((ENTRY_PADDING + KMAIN_ARGS_SIZE) % 16 == 0);

/// The multiboot header. `#[used]` because nothing in Rust references it;
/// the loader finds it by scanning for the magic.
#[used]
#[unsafe(link_section = ".multiboot")]
static MULTIBOOT_HEADER: Header = Header::new(HeaderFlags::ALIGN.union(HeaderFlags::MEMINFO));

global_asm!(
    ".section .bss, \"aw\", @nobits",
    ".p2align 4",
    "boot_stack_bottom:",
    ".skip {stack_size}",
    "boot_stack_top:",
    "",
    ".text",
    ".global _start",
    "_start:",
    "    mov esp, offset boot_stack_top",
    "    sub esp, {padding}",
    "    push ebx",
    "    push eax",
    "    call kmain",
    // kmain() never returns; if it somehow does, stop here.
    "2:",
    "    cli",
    "    hlt",
    "    jmp 2b",
    stack_size = const BOOT_STACK_SIZE,
    padding = const ENTRY_PADDING,
);
