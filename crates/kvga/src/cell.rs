//! One character position on screen.

use crate::color::ColorCode;

/// A glyph byte followed by its attribute byte, exactly as the hardware reads
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct Cell {
    pub glyph: u8,
    pub attribute: ColorCode,
}

const _: () = assert!(core::mem::size_of::<Cell>() == 2);
const _: () = assert!(core::mem::align_of::<Cell>() == 1);

impl Cell {
    pub const fn new(glyph: u8, attribute: ColorCode) -> Self {
        Self { glyph, attribute }
    }

    /// A space in the default attribute.
    pub const fn blank() -> Self {
        Self::new(b' ', ColorCode::DEFAULT)
    }

    pub const fn is_blank(&self) -> bool {
        self.glyph == b' ' && self.attribute.as_u8() == ColorCode::DEFAULT.as_u8()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn glyph_precedes_attribute_in_memory() {
        let cell = Cell::new(b'X', ColorCode::new(Color::LightGreen, Color::Blue));
        // SAFETY: Cell is repr(C), two u8-sized fields, no padding.
        let bytes: [u8; 2] = unsafe { core::mem::transmute(cell) };
        assert_eq!(bytes, [b'X', 0x1A]);
    }

    #[test]
    fn blank_cell() {
        let cell = Cell::blank();
        assert_eq!(cell.glyph, b' ');
        assert_eq!(cell.attribute.as_u8(), 0x0F);
        assert!(cell.is_blank());
        assert!(!Cell::new(b' ', ColorCode::new(Color::Red, Color::Black)).is_blank());
    }
}
