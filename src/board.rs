//! Playfield grid
//!
//! Coordinates are `(col, row)` with row 0 at the top of the field. Rows
//! above the field (negative) are open space that is never stored.

use crate::tetromino::TetrominoType;

/// Standard playfield dimensions
pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

/// A cell on the board - either empty or filled by a locked piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(TetrominoType),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_filled(&self) -> bool {
        matches!(self, Cell::Filled(_))
    }
}

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Grid stored as [row][col], row 0 is the top
    cells: [[Cell; BOARD_WIDTH]; BOARD_HEIGHT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_WIDTH]; BOARD_HEIGHT],
        }
    }

    /// Get the cell at (col, row), `None` outside the field
    pub fn get(&self, col: i32, row: i32) -> Option<Cell> {
        if !Self::in_bounds(col, row) {
            return None;
        }
        Some(self.cells[row as usize][col as usize])
    }

    /// Whether (col, row) blocks a piece. Space above the field is open,
    /// the side walls and floor are solid.
    pub fn is_occupied(&self, col: i32, row: i32) -> bool {
        if row < 0 {
            return false;
        }
        match self.get(col, row) {
            Some(cell) => cell.is_filled(),
            None => true,
        }
    }

    /// Write a cell. Writes above the field are dropped.
    pub fn set(&mut self, col: i32, row: i32, cell: Cell) {
        if row < 0 {
            return;
        }
        assert!(
            Self::in_bounds(col, row),
            "cell ({col}, {row}) is outside the field"
        );
        self.cells[row as usize][col as usize] = cell;
    }

    /// Remove every full row, shifting the rows above it down, and return
    /// how many rows were removed
    pub fn clear_full_rows(&mut self) -> usize {
        let mut write_row = BOARD_HEIGHT;

        // Compact bottom-up so each row is looked at exactly once
        for read_row in (0..BOARD_HEIGHT).rev() {
            if !self.is_row_full(read_row) {
                write_row -= 1;
                if write_row != read_row {
                    self.cells[write_row] = self.cells[read_row];
                }
            }
        }

        // Rows left over at the top become empty
        for row in 0..write_row {
            self.cells[row] = [Cell::Empty; BOARD_WIDTH];
        }

        write_row
    }

    /// Check if a row is completely filled
    fn is_row_full(&self, row: usize) -> bool {
        self.cells[row].iter().all(|cell| cell.is_filled())
    }

    /// Check if the board is completely empty
    pub fn is_empty(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_empty()))
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_WIDTH]> {
        self.cells.iter()
    }

    fn in_bounds(col: i32, row: i32) -> bool {
        (0..BOARD_WIDTH as i32).contains(&col) && (0..BOARD_HEIGHT as i32).contains(&row)
    }
}
