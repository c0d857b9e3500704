//! Cursor arithmetic for the 2x16 display
//!
//! The panel addresses its cells linearly: position 0 is the first cell of
//! line 0, position 16 the first cell of line 1. A position at or past the
//! last cell means the end of the display was reached.

use crate::commands::{CONTROL_CURSOR_LINE, CONTROL_CURSOR_POS};

/// Number of display lines
pub const LINES: i32 = 2;

/// Number of display columns
pub const COLUMNS: i32 = 16;

/// Number of addressable cells
pub const CELLS: i32 = LINES * COLUMNS;

/// Cursor faults and boundary conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CursorError {
    /// The requested position lies before the first cell
    NegativePosition(i32),
    /// The cursor moved past the last cell
    EndOfDisplay,
}

impl core::fmt::Display for CursorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CursorError::NegativePosition(pos) => write!(f, "cursor: negative position {}", pos),
            CursorError::EndOfDisplay => f.write_str("cursor: end of display"),
        }
    }
}

/// Linear cursor position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    pos: i32,
}

impl Cursor {
    /// Cursor at line 0, column 0
    pub const fn origin() -> Self {
        Self { pos: 0 }
    }

    /// Cursor at `row`, `col`
    ///
    /// No bounds check; use [`Cursor::move_to`] to get one.
    pub const fn at(row: i32, col: i32) -> Self {
        Self {
            pos: row * COLUMNS + col,
        }
    }

    /// Linear position
    pub fn position(&self) -> i32 {
        self.pos
    }

    /// Display line
    pub fn row(&self) -> i32 {
        self.pos / COLUMNS
    }

    /// Column within the line
    pub fn column(&self) -> i32 {
        self.pos % COLUMNS
    }

    /// Advance by `n` cells (negative moves backwards)
    ///
    /// A negative result is rejected and the cursor keeps its position.
    /// Reaching the end of the display commits the new position and
    /// reports [`CursorError::EndOfDisplay`].
    pub fn advance(&mut self, n: i32) -> Result<(), CursorError> {
        self.set(self.pos.saturating_add(n))
    }

    /// Move to `row`, `col`
    ///
    /// Columns past the end of a line carry into the following line.
    pub fn move_to(&mut self, row: i32, col: i32) -> Result<(), CursorError> {
        self.set(row.saturating_mul(COLUMNS).saturating_add(col))
    }

    fn set(&mut self, pos: i32) -> Result<(), CursorError> {
        if pos < 0 {
            return Err(CursorError::NegativePosition(pos));
        }
        self.pos = pos;
        self.check()
    }

    /// Check the cursor against the display bounds
    pub fn check(&self) -> Result<(), CursorError> {
        match self.pos {
            pos if pos < 0 => Err(CursorError::NegativePosition(pos)),
            pos if pos >= CELLS => Err(CursorError::EndOfDisplay),
            _ => Ok(()),
        }
    }

    /// Returns true once the cursor has moved past the last cell
    pub fn is_end_of_display(&self) -> bool {
        self.pos >= CELLS
    }

    /// Cells left before the current line wraps
    pub fn remaining_in_line(&self) -> usize {
        (COLUMNS - self.pos.rem_euclid(COLUMNS)) as usize
    }

    /// Control byte that moves the panel cursor here
    ///
    /// Only meaningful while the cursor is on the display.
    pub fn to_byte(&self) -> u8 {
        let row = self.row() as u8;
        let col = self.column() as u8;
        CONTROL_CURSOR_POS
            .wrapping_add(CONTROL_CURSOR_LINE.wrapping_mul(row))
            .wrapping_add(col)
    }
}
