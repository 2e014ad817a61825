//! Backing storage for the text grid.

use volatile::Volatile;

use crate::cell::Cell;
use crate::writer::Position;
use crate::{HEIGHT, VGA_ADDRESS, WIDTH};

/// Storage for a `WIDTH` x `HEIGHT` grid of cells.
///
/// Callers always pass in-range coordinates; implementations may panic
/// otherwise.
pub trait CellBuffer {
    fn read(&self, row: usize, column: usize) -> Cell;

    fn write(&mut self, row: usize, column: usize, cell: Cell);

    /// Called once the cursor has settled after each public writer operation.
    fn cursor_moved(&mut self, _position: Position) {}
}

impl<B: CellBuffer + ?Sized> CellBuffer for &mut B {
    fn read(&self, row: usize, column: usize) -> Cell {
        (**self).read(row, column)
    }

    fn write(&mut self, row: usize, column: usize, cell: Cell) {
        (**self).write(row, column, cell)
    }

    fn cursor_moved(&mut self, position: Position) {
        (**self).cursor_moved(position)
    }
}

// =============================================================================
// Memory-mapped text buffer
// =============================================================================

#[repr(transparent)]
struct Frame {
    cells: [[Volatile<Cell>; WIDTH]; HEIGHT],
}

/// The hardware text buffer. Every access is a volatile load or store.
pub struct VgaBuffer {
    frame: &'static mut Frame,
}

impl VgaBuffer {
    /// Takes the text region at [`VGA_ADDRESS`].
    ///
    /// # Safety
    ///
    /// Only one `VgaBuffer` may ever exist for the region, and the region
    /// must be mapped at its physical address.
    pub unsafe fn new() -> Self {
        Self::from_address(VGA_ADDRESS)
    }

    /// Takes a text region at an arbitrary address.
    ///
    /// # Safety
    ///
    /// `address` must point to `WIDTH * HEIGHT` writable cells that nothing
    /// else touches for the rest of the program.
    pub unsafe fn from_address(address: usize) -> Self {
        Self {
            frame: &mut *(address as *mut Frame),
        }
    }
}

impl CellBuffer for VgaBuffer {
    fn read(&self, row: usize, column: usize) -> Cell {
        self.frame.cells[row][column].read()
    }

    fn write(&mut self, row: usize, column: usize, cell: Cell) {
        self.frame.cells[row][column].write(cell);
    }
}

// =============================================================================
// Plain in-memory grid
// =============================================================================

/// An ordinary array standing in for video memory.
#[derive(Clone)]
pub struct MemoryBuffer {
    cells: [[Cell; WIDTH]; HEIGHT],
}

impl MemoryBuffer {
    pub const fn new() -> Self {
        Self {
            cells: [[Cell::blank(); WIDTH]; HEIGHT],
        }
    }

    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    pub fn row(&self, row: usize) -> &[Cell; WIDTH] {
        &self.cells[row]
    }

    /// The glyph bytes of one row.
    pub fn glyphs(&self, row: usize) -> [u8; WIDTH] {
        let mut glyphs = [0; WIDTH];
        for (glyph, cell) in glyphs.iter_mut().zip(self.cells[row].iter()) {
            *glyph = cell.glyph;
        }
        glyphs
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().flatten().all(Cell::is_blank)
    }
}

impl Default for MemoryBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl CellBuffer for MemoryBuffer {
    fn read(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    fn write(&mut self, row: usize, column: usize, cell: Cell) {
        self.cells[row][column] = cell;
    }
}
