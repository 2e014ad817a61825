// =============================================================================
// myOS - VGA Text Console
// =============================================================================
//
// Binds the `kvga` writer to real hardware:
//   - cells go to the memory-mapped text buffer at 0xB8000 (volatile stores)
//   - every settled cursor position is mirrored to the CRT controller, so the
//     blinking hardware cursor follows the text
//
// OWNERSHIP:
//   There is exactly one Console and kmain() owns it. Nothing else in the
//   kernel writes to the screen (logging and panics go to serial), so the
//   console needs no lock. An interrupt-driven writer would change that.
// =============================================================================

use kvga::{Cell, CellBuffer, Position, VgaBuffer, Writer};

/// The text buffer plus the CRTC cursor.
pub struct Screen {
    vga: VgaBuffer,
}

impl CellBuffer for Screen {
    fn read(&self, row: usize, column: usize) -> Cell {
        self.vga.read(row, column)
    }

    fn write(&mut self, row: usize, column: usize, cell: Cell) {
        self.vga.write(row, column, cell);
    }

    fn cursor_moved(&mut self, position: Position) {
        // The grid has 2000 cells, so the offset always fits the 16-bit register pair.
        khal::crtc::set_cursor(position.offset() as u16);
    }
}

pub type Console = Writer<Screen>;

/// Takes the screen, clears it and homes the cursor.
///
/// # Safety
///
/// Call once. The text buffer must be mapped at its physical address, which
/// holds in 32-bit protected mode with paging off.
pub unsafe fn init() -> Console {
    // SAFETY: forwarded to the caller.
    let vga = unsafe { VgaBuffer::new() };
    Writer::new(Screen { vga })
}
