use kvga::{Cell, Color, ColorCode, MemoryBuffer, Position, Writer, HEIGHT, WIDTH};
use proptest::prelude::*;

fn any_attribute() -> impl Strategy<Value = ColorCode> {
    (0u8..16, 0u8..16)
        .prop_map(|(fg, bg)| ColorCode::new(Color::from_nibble(fg), Color::from_nibble(bg)))
}

fn printable() -> impl Strategy<Value = u8> {
    0x20u8..=0x7E
}

/// Moves a fresh writer to `(row, column)` by printing filler.
fn writer_at(row: usize, column: usize) -> Writer<MemoryBuffer> {
    let mut writer = Writer::new(MemoryBuffer::new());
    let filler = ColorCode::new(Color::DarkGray, Color::Black);
    for _ in 0..row {
        writer.put_char(b'\n', filler);
    }
    for _ in 0..column {
        writer.put_char(b'#', filler);
    }
    writer
}

proptest! {
    #[test]
    fn put_char_touches_exactly_one_cell(
        row in 0..HEIGHT,
        column in 0..WIDTH - 1,
        glyph in printable(),
        attribute in any_attribute(),
    ) {
        let mut writer = writer_at(row, column);
        let before = writer.buffer().clone();
        prop_assert_eq!(writer.cursor(), Position::new(row, column));

        writer.put_char(glyph, attribute);

        for r in 0..HEIGHT {
            for c in 0..WIDTH {
                let expected = if (r, c) == (row, column) {
                    Cell::new(glyph, attribute)
                } else {
                    before.cell(r, c)
                };
                prop_assert_eq!(writer.buffer().cell(r, c), expected);
            }
        }
        prop_assert_eq!(writer.cursor(), Position::new(row, column + 1));
    }

    #[test]
    fn full_line_wraps_exactly_once(
        row in 0..HEIGHT - 1,
        line in proptest::collection::vec(printable(), WIDTH),
        attribute in any_attribute(),
    ) {
        let mut writer = writer_at(row, 0);
        writer.print_bytes(&line, attribute);

        prop_assert_eq!(writer.cursor(), Position::new(row + 1, 0));
        for (column, glyph) in line.iter().enumerate() {
            prop_assert_eq!(writer.buffer().cell(row, column), Cell::new(*glyph, attribute));
        }
    }

    #[test]
    fn cursor_always_settles_inside_grid(
        bytes in proptest::collection::vec(any::<u8>(), 0..4096),
        attribute in any_attribute(),
    ) {
        let mut writer = Writer::new(MemoryBuffer::new());
        for byte in bytes {
            writer.put_char(byte, attribute);
            let cursor = writer.cursor();
            prop_assert!(cursor.row < HEIGHT);
            prop_assert!(cursor.column < WIDTH);
        }
    }

    #[test]
    fn print_matches_sequential_put_char(
        text in "[ -~\n\t]{0,600}",
        attribute in any_attribute(),
    ) {
        let mut batched = Writer::new(MemoryBuffer::new());
        batched.print(&text, attribute);

        let mut single = Writer::new(MemoryBuffer::new());
        for byte in text.bytes() {
            single.put_char(byte, attribute);
        }

        prop_assert_eq!(batched.cursor(), single.cursor());
        for r in 0..HEIGHT {
            prop_assert_eq!(batched.buffer().row(r), single.buffer().row(r));
        }
    }
}
