// =============================================================================
// myOS - Kernel Entry Point
// =============================================================================
//
// This is the first Rust code that runs when the kernel boots.
//
// WHAT HAPPENED BEFORE WE GOT HERE:
//   1. A multiboot v1 loader (GRUB, or QEMU's `-kernel`) found our header
//      in the first 8 KiB of the image
//   2. It loaded the ELF segments at 1 MiB and switched to 32-bit protected
//      mode with paging off and interrupts disabled
//   3. It jumped to `_start` (arch/x86/boot.rs) with EAX = 0x2BADB002 and
//      EBX = physical address of the multiboot information structure
//   4. `_start` loaded our 16 KiB stack and called kmain(magic, info)
//
// WHAT WE DO HERE:
//   1. Bring up COM1 and the serial logger
//   2. Take over the VGA text console
//   3. Print the boot report (banner, signature check, memory sizes)
//   4. Idle forever
//
// On a hosted target (cargo test, or running the binary on a dev machine)
// none of the bare-metal code exists: `main` renders the same report into
// an in-memory grid and prints it.
// =============================================================================

// =============================================================================
// Crate-level attributes
// =============================================================================
//
// On bare metal there is no standard library and no runtime that calls
// `main`; the bootloader jumps straight into `_start`. Everywhere else we
// build as an ordinary program.
// =============================================================================

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

/// Architecture-specific code: multiboot header, entry stub, HLT.
#[cfg(target_os = "none")]
mod arch;

/// Compile-time settings: report colors, banner, log level.
mod config;

/// Device drivers: the VGA text console.
#[cfg(target_os = "none")]
mod drivers;

/// kprint!/kprintln! and the panic handler.
#[cfg(target_os = "none")]
#[macro_use]
mod util;

// =============================================================================
// Kernel Entry Point
// =============================================================================

/// The kernel's main entry point, called from `_start`.
///
/// `magic` and `info` are the raw EAX/EBX values from the bootloader.
/// Never returns.
#[cfg(target_os = "none")]
#[unsafe(no_mangle)]
pub extern "C" fn kmain(magic: u32, info: *const kboot::MultibootInfo) -> ! {
    use kboot::{report, BootHandoff};

    // =========================================================================
    // Step 1: Serial logging
    // =========================================================================
    // The screen shows only the report; diagnostics go to COM1 where QEMU's
    // `-serial stdio` picks them up.
    #[cfg(feature = "serial-log")]
    {
        let serial_ok = klog::init(config::LOG_LEVEL);
        if serial_ok {
            kprintln!();
            kprintln!("{}", config::BANNER);
        }
    }

    log::debug!("kmain: magic={:#010x} info={:p}", magic, info);

    // =========================================================================
    // Step 2: Boot handoff
    // =========================================================================
    // SAFETY: the bootloader passes either null or the physical address of
    // its info structure, which is identity-mapped (paging is off) and stays
    // untouched for the kernel's whole life.
    let handoff = unsafe { BootHandoff::from_raw(magic, info) };

    // =========================================================================
    // Step 3: Console and boot report
    // =========================================================================
    // SAFETY: the only call, and the text buffer sits at its physical
    // address in protected mode without paging.
    let mut console = unsafe { drivers::console::init() };

    match report::render(&mut console, &handoff, &config::REPORT) {
        Ok(Some(memory)) => log::info!(
            "boot report: lower={} KB upper={} KB",
            memory.lower_kb,
            memory.upper_kb
        ),
        Ok(None) => log::info!("boot report: no memory information"),
        Err(err) => log::warn!("boot report: {err}"),
    }

    // =========================================================================
    // Step 4: Idle
    // =========================================================================
    log::info!("kernel is running, idling");
    arch::cpu::idle_forever()
}

// =============================================================================
// Hosted preview
// =============================================================================

/// Renders the report for a typical QEMU handoff (640 KB / 127 MB) and
/// prints the non-blank part of the screen.
#[cfg(not(target_os = "none"))]
fn main() {
    use kboot::multiboot::BOOTLOADER_MAGIC;
    use kboot::{report, BootHandoff, InfoFlags, MultibootInfo};
    use kvga::{MemoryBuffer, Writer, HEIGHT};

    let info = MultibootInfo::new(InfoFlags::MEMORY, 640, 130048);
    let handoff = BootHandoff::new(BOOTLOADER_MAGIC, Some(&info));

    let mut console = Writer::new(MemoryBuffer::new());
    if let Err(err) = report::render(&mut console, &handoff, &config::REPORT) {
        eprintln!("boot report: {err}");
    }

    let rows: Vec<String> = (0..HEIGHT)
        .map(|row| {
            let glyphs = console.buffer().glyphs(row);
            String::from_utf8_lossy(&glyphs).trim_end().to_string()
        })
        .collect();
    let used = rows.iter().rposition(|row| !row.is_empty()).map_or(0, |last| last + 1);
    for row in &rows[..used] {
        println!("{row}");
    }
}
