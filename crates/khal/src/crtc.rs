//! VGA CRT controller: the blinking hardware cursor.
//!
//! The controller exposes an index/data port pair. The cursor location is a
//! 16-bit cell offset split across registers 0x0E (high) and 0x0F (low).

use crate::port::Port;

const INDEX: Port = Port::new(0x3D4);
const DATA: Port = Port::new(0x3D5);

const CURSOR_LOCATION_HIGH: u8 = 0x0E;
const CURSOR_LOCATION_LOW: u8 = 0x0F;

/// The two register writes that place the cursor at `offset`, high first.
pub const fn cursor_registers(offset: u16) -> [(u8, u8); 2] {
    [
        (CURSOR_LOCATION_HIGH, (offset >> 8) as u8),
        (CURSOR_LOCATION_LOW, (offset & 0xFF) as u8),
    ]
}

/// Moves the hardware cursor to cell `offset`, counted row-major from the
/// top-left corner.
pub fn set_cursor(offset: u16) {
    for (register, value) in cursor_registers(offset) {
        // SAFETY: the CRTC index/data ports are standard on every VGA
        // compatible adapter; writing the cursor location has no other effect.
        unsafe {
            INDEX.write(register);
            DATA.write(value);
        }
    }
}
