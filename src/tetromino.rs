//! Tetromino definitions and shapes
//!
//! The seven pieces are stored as square occupancy matrices. Rotation never
//! touches a definition; it builds a new [`Shape`].

use ratatui::style::Color;

/// Largest matrix side (the I piece)
pub const MAX_SHAPE_SIZE: usize = 4;

/// The 7 tetromino types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TetrominoType {
    I, // Cyan - long bar
    O, // Yellow - square
    T, // Purple - T-shape
    L, // Orange - L-shape
    J, // Blue - J-shape
    S, // Green - S-shape
    Z, // Red - Z-shape
}

impl TetrominoType {
    /// Get the color for this tetromino
    pub fn color(&self) -> Color {
        match self {
            TetrominoType::I => Color::Rgb(0x00, 0xff, 0xff),
            TetrominoType::O => Color::Rgb(0xff, 0xff, 0x00),
            TetrominoType::T => Color::Rgb(0x80, 0x00, 0x80),
            TetrominoType::L => Color::Rgb(0xff, 0xa5, 0x00),
            TetrominoType::J => Color::Rgb(0x00, 0x00, 0xff),
            TetrominoType::S => Color::Rgb(0x00, 0xff, 0x00),
            TetrominoType::Z => Color::Rgb(0xff, 0x00, 0x00),
        }
    }

    /// Get all tetromino types in catalog order
    pub fn all() -> [TetrominoType; 7] {
        [
            TetrominoType::I,
            TetrominoType::O,
            TetrominoType::T,
            TetrominoType::L,
            TetrominoType::J,
            TetrominoType::S,
            TetrominoType::Z,
        ]
    }

    /// Get the spawn orientation of this tetromino
    pub fn shape(&self) -> Shape {
        match self {
            TetrominoType::I => Shape::from_rows(&[
                &[0, 1, 0, 0],
                &[0, 1, 0, 0],
                &[0, 1, 0, 0],
                &[0, 1, 0, 0],
            ]),
            TetrominoType::O => Shape::from_rows(&[&[1, 1], &[1, 1]]),
            TetrominoType::T => Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]]),
            TetrominoType::L => Shape::from_rows(&[&[0, 1, 0], &[0, 1, 0], &[0, 1, 1]]),
            TetrominoType::J => Shape::from_rows(&[&[0, 1, 0], &[0, 1, 0], &[1, 1, 0]]),
            TetrominoType::S => Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]]),
            TetrominoType::Z => Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]]),
        }
    }
}

/// Ordered set of every piece definition
pub fn definitions() -> [TetrominoType; 7] {
    TetrominoType::all()
}

/// A square occupancy matrix, indexed `[row][col]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    size: usize,
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from rows of 0/1. Panics on a non-square or oversized matrix.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let size = rows.len();
        assert!(
            (1..=MAX_SHAPE_SIZE).contains(&size),
            "shape size {size} out of range"
        );
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), size, "shape matrix must be square");
            for (x, &v) in row.iter().enumerate() {
                cells[y][x] = v != 0;
            }
        }
        Self { size, cells }
    }

    /// Side length of the matrix
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size && self.cells[y][x]
    }

    /// Occupied cells as (x, y) offsets from the top-left corner
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (0..self.size).flat_map(move |y| {
            (0..self.size)
                .filter(move |&x| self.cells[y][x])
                .map(move |x| (x as i32, y as i32))
        })
    }

    /// 90 degree clockwise rotation: `new[x][size-1-y] = old[y][x]`
    pub fn rotated_cw(&self) -> Shape {
        let n = self.size;
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for y in 0..n {
            for x in 0..n {
                cells[x][n - 1 - y] = self.cells[y][x];
            }
        }
        Shape { size: n, cells }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_piece_has_four_cells() {
        for kind in definitions() {
            assert_eq!(kind.shape().cells().count(), 4, "{kind:?}");
        }
    }

    #[test]
    fn test_catalog_order() {
        assert_eq!(
            definitions(),
            [
                TetrominoType::I,
                TetrominoType::O,
                TetrominoType::T,
                TetrominoType::L,
                TetrominoType::J,
                TetrominoType::S,
                TetrominoType::Z,
            ]
        );
    }

    #[test]
    fn test_rotate_t_clockwise() {
        // .T.      .T.
        // TTT  ->  .TT
        // ...      .T.
        let rotated = TetrominoType::T.shape().rotated_cw();
        let expected = Shape::from_rows(&[&[0, 1, 0], &[0, 1, 1], &[0, 1, 0]]);
        assert_eq!(rotated, expected);
    }

    #[test]
    fn test_rotate_i_becomes_horizontal() {
        let rotated = TetrominoType::I.shape().rotated_cw();
        let cells: Vec<_> = rotated.cells().collect();
        assert_eq!(cells, vec![(0, 1), (1, 1), (2, 1), (3, 1)]);
    }

    #[test]
    fn test_rotation_leaves_definition_untouched() {
        let original = TetrominoType::L.shape();
        let _ = original.rotated_cw();
        assert_eq!(original, TetrominoType::L.shape());
    }

    #[test]
    #[should_panic(expected = "square")]
    fn test_non_square_shape_panics() {
        let _ = Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]);
    }
}
