//! The cursor state machine over a [`CellBuffer`].
//!
//! Every byte goes through [`Writer::put_char`]:
//!
//! ```text
//!   '\n'  → row + 1, column 0               (no cell written)
//!   '\t'  → column = (column + 4) & !3      (no cell written)
//!   other → cell at cursor, column + 1
//!   then: column ≥ WIDTH  → column 0, row + 1
//!   then: row ≥ HEIGHT    → scroll up one row, row = HEIGHT - 1
//! ```
//!
//! The tab rule is the literal mask, not "advance to the next stop": from a
//! column that is already a multiple of 4 it still moves a full 4 columns.

use core::fmt;

use crate::buffer::CellBuffer;
use crate::cell::Cell;
use crate::color::ColorCode;
use crate::{HEIGHT, TAB_WIDTH, WIDTH};

/// A cursor location. Always inside the grid once an operation returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Cell index in row-major order.
    pub const fn offset(self) -> usize {
        self.row * WIDTH + self.column
    }
}

/// Text writer owning the grid and the cursor.
///
/// Single writer: the owner holds it by value and passes `&mut` down. Wrap it
/// in a lock before sharing it with an interrupt handler.
pub struct Writer<B: CellBuffer> {
    buffer: B,
    row: usize,
    column: usize,
    /// Attribute used by the `fmt::Write` impl.
    color: ColorCode,
}

impl<B: CellBuffer> Writer<B> {
    /// Wraps `buffer` and clears it.
    pub fn new(buffer: B) -> Self {
        let mut writer = Self {
            buffer,
            row: 0,
            column: 0,
            color: ColorCode::DEFAULT,
        };
        writer.clear();
        writer
    }

    /// Blanks every cell in the default attribute and homes the cursor.
    pub fn clear(&mut self) {
        for row in 0..HEIGHT {
            self.clear_row(row);
        }
        self.row = 0;
        self.column = 0;
        self.sync_cursor();
    }

    /// Writes one byte in `attribute` and advances the cursor.
    pub fn put_char(&mut self, byte: u8, attribute: ColorCode) {
        self.put(byte, attribute);
        self.sync_cursor();
    }

    /// Writes every byte of `s` in `attribute`.
    pub fn print(&mut self, s: &str, attribute: ColorCode) {
        self.print_bytes(s.as_bytes(), attribute);
    }

    /// Writes raw code-page bytes in `attribute`.
    pub fn print_bytes(&mut self, bytes: &[u8], attribute: ColorCode) {
        for &byte in bytes {
            self.put(byte, attribute);
        }
        self.sync_cursor();
    }

    pub fn cursor(&self) -> Position {
        Position::new(self.row, self.column)
    }

    /// Sets the attribute used by `write!` on this writer.
    pub fn set_color(&mut self, color: ColorCode) {
        self.color = color;
    }

    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    fn put(&mut self, byte: u8, attribute: ColorCode) {
        match byte {
            b'\n' => {
                self.row += 1;
                self.column = 0;
            }
            b'\t' => {
                self.column = (self.column + TAB_WIDTH) & !(TAB_WIDTH - 1);
            }
            glyph => {
                self.buffer
                    .write(self.row, self.column, Cell::new(glyph, attribute));
                self.column += 1;
            }
        }

        if self.column >= WIDTH {
            self.column = 0;
            self.row += 1;
        }

        if self.row >= HEIGHT {
            self.scroll();
            self.row = HEIGHT - 1;
        }
    }

    fn scroll(&mut self) {
        for row in 1..HEIGHT {
            for column in 0..WIDTH {
                let cell = self.buffer.read(row, column);
                self.buffer.write(row - 1, column, cell);
            }
        }
        self.clear_row(HEIGHT - 1);
    }

    fn clear_row(&mut self, row: usize) {
        for column in 0..WIDTH {
            self.buffer.write(row, column, Cell::blank());
        }
    }

    fn sync_cursor(&mut self) {
        let position = self.cursor();
        self.buffer.cursor_moved(position);
    }
}

impl<B: CellBuffer> fmt::Write for Writer<B> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let color = self.color;
        self.print(s, color);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::MemoryBuffer;
    use crate::color::Color;
    use core::fmt::Write;

    const GREEN: ColorCode = ColorCode::new(Color::LightGreen, Color::Black);

    fn writer() -> Writer<MemoryBuffer> {
        Writer::new(MemoryBuffer::new())
    }

    #[test]
    fn new_writer_is_cleared_at_origin() {
        let w = writer();
        assert_eq!(w.cursor(), Position::new(0, 0));
        assert!(w.buffer().is_blank());
    }

    #[test]
    fn printable_writes_one_cell_and_advances() {
        let mut w = writer();
        w.put_char(b'x', GREEN);
        assert_eq!(w.buffer().cell(0, 0), Cell::new(b'x', GREEN));
        assert_eq!(w.cursor(), Position::new(0, 1));
    }

    #[test]
    fn newline_writes_nothing() {
        let mut w = writer();
        w.print("ab", GREEN);
        w.put_char(b'\n', GREEN);
        assert_eq!(w.cursor(), Position::new(1, 0));
        assert!(w.buffer().row(1).iter().all(Cell::is_blank));
        assert!(w.buffer().row(0)[2..].iter().all(Cell::is_blank));
    }

    #[test]
    fn tab_uses_mask_arithmetic() {
        let cases = [(0, 4), (1, 4), (3, 4), (4, 8), (5, 8), (7, 8), (8, 12)];
        for (start, expected) in cases {
            let mut w = writer();
            for _ in 0..start {
                w.put_char(b'.', GREEN);
            }
            w.put_char(b'\t', GREEN);
            assert_eq!(w.cursor(), Position::new(0, expected), "tab from {start}");
            assert!(w.buffer().row(0)[start..].iter().all(Cell::is_blank));
        }
    }

    #[test]
    fn tab_from_column_five_lands_on_eight() {
        let mut w = writer();
        w.print("12345", GREEN);
        assert_eq!(w.cursor().column, 5);
        w.put_char(b'\t', GREEN);
        assert_eq!(w.cursor(), Position::new(0, 8));
    }

    #[test]
    fn tab_past_last_stop_wraps() {
        let mut w = writer();
        for _ in 0..77 {
            w.put_char(b'-', GREEN);
        }
        w.put_char(b'\t', GREEN);
        assert_eq!(w.cursor(), Position::new(1, 0));
    }

    #[test]
    fn last_column_write_wraps() {
        let mut w = writer();
        for _ in 0..WIDTH - 1 {
            w.put_char(b'a', GREEN);
        }
        assert_eq!(w.cursor(), Position::new(0, WIDTH - 1));
        w.put_char(b'b', GREEN);
        assert_eq!(w.buffer().cell(0, WIDTH - 1).glyph, b'b');
        assert_eq!(w.cursor(), Position::new(1, 0));
    }

    #[test]
    fn ab_newline_c() {
        let mut w = writer();
        w.clear();
        w.print("AB\n", GREEN);
        w.print("C", GREEN);
        assert_eq!(w.buffer().cell(0, 0).glyph, b'A');
        assert_eq!(w.buffer().cell(0, 1).glyph, b'B');
        assert_eq!(w.buffer().cell(1, 0).glyph, b'C');
        assert_eq!(w.cursor(), Position::new(1, 1));
    }

    #[test]
    fn scroll_shifts_rows_and_blanks_bottom() {
        let mut w = writer();
        let red = ColorCode::new(Color::LightRed, Color::Blue);
        for row in 0..HEIGHT {
            w.put_char(b'a' + row as u8, red);
            if row < HEIGHT - 1 {
                w.put_char(b'\n', red);
            }
        }
        assert_eq!(w.cursor(), Position::new(HEIGHT - 1, 1));

        w.put_char(b'\n', red);

        assert_eq!(w.cursor(), Position::new(HEIGHT - 1, 0));
        for row in 0..HEIGHT - 1 {
            assert_eq!(w.buffer().cell(row, 0), Cell::new(b'b' + row as u8, red));
        }
        assert!(w.buffer().row(HEIGHT - 1).iter().all(Cell::is_blank));
    }

    #[test]
    fn scroll_blank_row_ignores_caller_attribute() {
        let mut w = writer();
        let loud = ColorCode::new(Color::Yellow, Color::Magenta);
        for _ in 0..HEIGHT {
            w.put_char(b'\n', loud);
        }
        let bottom = w.buffer().row(HEIGHT - 1);
        assert!(bottom.iter().all(|cell| cell.attribute == ColorCode::DEFAULT));
    }

    #[test]
    fn height_plus_one_newlines_leave_blank_grid() {
        let mut w = writer();
        for _ in 0..HEIGHT + 1 {
            w.put_char(b'\n', GREEN);
        }
        assert!(w.buffer().is_blank());
        assert_eq!(w.cursor(), Position::new(HEIGHT - 1, 0));
    }

    #[test]
    fn write_at_bottom_right_scrolls() {
        let mut w = writer();
        for _ in 0..HEIGHT - 1 {
            w.put_char(b'\n', GREEN);
        }
        for _ in 0..WIDTH {
            w.put_char(b'z', GREEN);
        }
        assert_eq!(w.cursor(), Position::new(HEIGHT - 1, 0));
        assert!(w.buffer().row(HEIGHT - 2).iter().all(|c| c.glyph == b'z'));
        assert!(w.buffer().row(HEIGHT - 1).iter().all(Cell::is_blank));
    }

    #[test]
    fn clear_is_idempotent() {
        let mut w = writer();
        w.print("some text\n\tmore", GREEN);
        w.clear();
        let once = (w.buffer().clone(), w.cursor());
        w.clear();
        assert!(w.buffer().is_blank());
        assert!(once.0.is_blank());
        assert_eq!(w.cursor(), once.1);
        assert_eq!(w.cursor(), Position::new(0, 0));
    }

    #[test]
    fn fmt_write_uses_current_color() {
        let mut w = writer();
        w.set_color(GREEN);
        write!(w, "{}-{:X}", 42, 0xBEEFu32).unwrap();
        let text: [u8; 7] = w.buffer().glyphs(0)[..7].try_into().unwrap();
        assert_eq!(&text, b"42-BEEF");
        assert_eq!(w.buffer().cell(0, 0).attribute, GREEN);
    }

    #[test]
    fn print_bytes_writes_code_page_glyphs() {
        let mut w = writer();
        w.print_bytes(&[0xDB, 0xB0], GREEN);
        assert_eq!(w.buffer().cell(0, 0).glyph, 0xDB);
        assert_eq!(w.buffer().cell(0, 1).glyph, 0xB0);
    }

    #[derive(Default)]
    struct Tracking {
        inner: MemoryBuffer,
        moves: Vec<Position>,
    }

    impl CellBuffer for Tracking {
        fn read(&self, row: usize, column: usize) -> Cell {
            self.inner.read(row, column)
        }

        fn write(&mut self, row: usize, column: usize, cell: Cell) {
            self.inner.write(row, column, cell)
        }

        fn cursor_moved(&mut self, position: Position) {
            self.moves.push(position);
        }
    }

    #[test]
    fn cursor_hook_fires_once_per_operation() {
        let mut w = Writer::new(Tracking::default());
        w.print("hello\nworld", GREEN);
        w.put_char(b'!', GREEN);
        let moves = &w.buffer().moves;
        assert_eq!(
            moves,
            &[Position::new(0, 0), Position::new(1, 5), Position::new(1, 6)]
        );
    }

    #[test]
    fn position_offset_is_row_major() {
        assert_eq!(Position::new(0, 0).offset(), 0);
        assert_eq!(Position::new(10, 40).offset(), 840);
        assert_eq!(Position::new(HEIGHT - 1, WIDTH - 1).offset(), 1999);
    }
}
