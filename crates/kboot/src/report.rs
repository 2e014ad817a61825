//! The boot diagnostics shown on the text console.
//!
//! ```text
//! myOS v0.1 - Minimal x86-32 Kernel
//! Multiboot magic: 0x2BADB002
//! Multiboot signature: VALID
//! Memory info available
//! Lower memory: 640 KB
//! Upper memory: 130048 KB
//!
//! Kernel is running...
//! ```
//!
//! A bad signature replaces everything after the magic line with
//! `ERROR: Invalid Multiboot signature!`. Every line shares one color.

use kvga::{CellBuffer, ColorCode, Writer};

use crate::digits::{hex32, Decimal};
use crate::error::BootError;
use crate::multiboot::{BootHandoff, MemoryInfo};

/// Text and color for the report.
#[derive(Debug, Clone, Copy)]
pub struct ReportConfig<'a> {
    /// First line on screen, without the trailing newline.
    pub banner: &'a str,
    pub text: ColorCode,
}

/// Prints the boot report for `handoff` at the console's cursor.
///
/// Returns what was learned from the handoff so the caller can log it. An
/// error here has already been shown on screen.
pub fn render<B: CellBuffer>(
    console: &mut Writer<B>,
    handoff: &BootHandoff<'_>,
    config: &ReportConfig<'_>,
) -> Result<Option<MemoryInfo>, BootError> {
    let text = config.text;

    console.print(config.banner, text);
    console.put_char(b'\n', text);

    console.print("Multiboot magic: 0x", text);
    for digit in hex32(handoff.magic()) {
        console.put_char(digit, text);
    }
    console.put_char(b'\n', text);

    let outcome = match handoff.check_signature() {
        Ok(()) => {
            console.print("Multiboot signature: VALID\n", text);
            match handoff.info() {
                Some(info) => {
                    let memory = info.memory();
                    if let Some(memory) = memory {
                        console.print("Memory info available\n", text);
                        print_kb(console, "Lower memory: ", memory.lower_kb, text);
                        print_kb(console, "Upper memory: ", memory.upper_kb, text);
                    }
                    Ok(memory)
                }
                None => Err(BootError::MissingInfo),
            }
        }
        Err(err) => {
            console.print("ERROR: Invalid Multiboot signature!\n", text);
            Err(err)
        }
    };

    console.print("\nKernel is running...\n", text);
    outcome
}

fn print_kb<B: CellBuffer>(console: &mut Writer<B>, label: &str, kb: u32, color: ColorCode) {
    console.print(label, color);
    for &digit in Decimal::new(kb).as_bytes() {
        console.put_char(digit, color);
    }
    console.print(" KB\n", color);
}
