//! Placement and rotation legality
//!
//! Rotation is a plain clockwise matrix turn with no wall kicks: if the
//! turned shape does not fit where the piece already is, the rotation is
//! refused.

use crate::board::{BOARD_WIDTH, Board};
use crate::tetromino::Shape;

/// Grid-relative top-left anchor of a shape matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub col: i32,
    pub row: i32,
}

impl Position {
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// This position moved by (dcol, drow)
    pub fn offset(self, dcol: i32, drow: i32) -> Self {
        Self {
            col: self.col + dcol,
            row: self.row + drow,
        }
    }
}

/// Whether `shape` fits at `pos`. Cells above the field fit as long as
/// they stay between the walls.
pub fn can_place(shape: &Shape, pos: Position, board: &Board) -> bool {
    shape.cells().all(|(x, y)| {
        let (col, row) = (pos.col + x, pos.row + y);
        (0..BOARD_WIDTH as i32).contains(&col) && !board.is_occupied(col, row)
    })
}

/// Clockwise rotation of a shape
pub fn rotate(shape: &Shape) -> Shape {
    shape.rotated_cw()
}

/// The rotated shape, if it fits at the unchanged position
pub fn try_rotate(shape: &Shape, pos: Position, board: &Board) -> Option<Shape> {
    let rotated = rotate(shape);
    can_place(&rotated, pos, board).then_some(rotated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BOARD_HEIGHT, BOARD_WIDTH, Cell};
    use crate::tetromino::{TetrominoType, definitions};
    use proptest::prelude::*;

    fn full_board() -> Board {
        let mut board = Board::new();
        for row in 0..BOARD_HEIGHT as i32 {
            for col in 0..BOARD_WIDTH as i32 {
                board.set(col, row, Cell::Filled(TetrominoType::Z));
            }
        }
        board
    }

    fn any_shape() -> impl Strategy<Value = Shape> {
        (0..7usize, 0..4usize).prop_map(|(kind, turns)| {
            let mut shape = definitions()[kind].shape();
            for _ in 0..turns {
                shape = rotate(&shape);
            }
            shape
        })
    }

    #[test]
    fn test_o_fits_in_empty_corner() {
        let board = Board::new();
        let o = TetrominoType::O.shape();
        assert!(can_place(&o, Position::new(0, 18), &board));
        assert!(!can_place(&o, Position::new(0, 19), &board));
        assert!(!can_place(&o, Position::new(9, 0), &board));
    }

    #[test]
    fn test_blocked_by_locked_cell() {
        let mut board = Board::new();
        board.set(1, 10, Cell::Filled(TetrominoType::I));
        let o = TetrominoType::O.shape();
        assert!(!can_place(&o, Position::new(0, 9), &board));
        assert!(can_place(&o, Position::new(2, 9), &board));
    }

    #[test]
    fn test_rotation_rejected_against_wall() {
        let board = Board::new();
        // Vertical I hugging the left wall; turning it would stick out
        let i = TetrominoType::I.shape();
        let pos = Position::new(-1, 5);
        assert!(can_place(&i, pos, &board));
        assert!(try_rotate(&i, pos, &board).is_none());
    }

    #[test]
    fn test_rotation_allowed_above_field() {
        let board = full_board();
        let t = TetrominoType::T.shape();
        let pos = Position::new(3, -3);
        assert!(can_place(&t, pos, &board));
        assert!(try_rotate(&t, pos, &board).is_some());
    }

    #[test]
    fn test_walls_extend_above_field() {
        let board = Board::new();
        let z = TetrominoType::Z.shape();
        // Top row of the Z sits at row -1, one cell past the left wall
        assert!(!can_place(&z, Position::new(-1, -1), &board));
        assert!(can_place(&z, Position::new(0, -1), &board));
        // Right wall, fully above the field
        let i = TetrominoType::I.shape().rotated_cw();
        assert!(!can_place(&i, Position::new(BOARD_WIDTH as i32 - 3, -2), &board));
        assert!(can_place(&i, Position::new(BOARD_WIDTH as i32 - 4, -2), &board));
    }

    #[test]
    fn test_four_rotations_return_original() {
        for kind in definitions() {
            let shape = kind.shape();
            let turned = rotate(&rotate(&rotate(&rotate(&shape))));
            assert_eq!(turned, shape, "{kind:?}");
        }
    }

    proptest! {
        #[test]
        fn prop_outside_columns_never_fit(shape in any_shape(), row in -6i32..24, col in -8i32..18) {
            let board = Board::new();
            let pos = Position::new(col, row);
            let sticks_out = shape.cells().any(|(x, y)| {
                let c = col + x;
                c < 0 || c >= BOARD_WIDTH as i32 || row + y >= BOARD_HEIGHT as i32
            });
            if sticks_out {
                prop_assert!(!can_place(&shape, pos, &board));
            } else {
                prop_assert!(can_place(&shape, pos, &board));
            }
        }

        #[test]
        fn prop_above_field_always_fits(shape in any_shape(), col in 0i32..7) {
            let board = full_board();
            let size = shape.size() as i32;
            let pos = Position::new(col, -size);
            prop_assert!(can_place(&shape, pos, &board));
        }
    }
}
