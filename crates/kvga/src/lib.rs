//! VGA text-mode display driver.
//!
//! The screen is an 80x25 grid of two-byte cells (glyph, attribute) mapped at
//! physical address `0xB8000`. A [`Writer`] owns a [`CellBuffer`] and the
//! cursor, and turns a byte stream into cell writes with line wrap, a coarse
//! tab, and scroll-on-overflow.
//!
//! The grid storage sits behind the [`CellBuffer`] trait: [`VgaBuffer`] is the
//! real memory-mapped region, [`MemoryBuffer`] is an ordinary array used by the
//! hosted preview and the tests.
#![cfg_attr(not(test), no_std)]

pub mod buffer;
pub mod cell;
pub mod color;
pub mod writer;

pub use buffer::{CellBuffer, MemoryBuffer, VgaBuffer};
pub use cell::Cell;
pub use color::{Color, ColorCode};
pub use writer::{Position, Writer};

/// Number of columns in the text grid.
pub const WIDTH: usize = 80;

/// Number of rows in the text grid.
pub const HEIGHT: usize = 25;

/// Physical address of the color text-mode buffer.
pub const VGA_ADDRESS: usize = 0xB8000;

/// Tab stops are every 4 columns.
pub const TAB_WIDTH: usize = 4;
