//! Active falling piece logic

use crate::board::{BOARD_WIDTH, Board};
use crate::collision::{Position, can_place, try_rotate};
use crate::tetromino::{Shape, TetrominoType};

/// Row a freshly spawned piece starts on; one row of entry buffer
pub const SPAWN_ROW: i32 = -1;
/// Row a piece swapped out of the hold slot starts on
pub const HOLD_SWAP_ROW: i32 = 0;

/// Column that horizontally centers a shape of the given width
pub fn spawn_col(shape_width: usize) -> i32 {
    (BOARD_WIDTH as i32 - shape_width as i32).div_euclid(2)
}

/// An active falling piece
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePiece {
    /// The type of tetromino
    pub kind: TetrominoType,
    /// Current orientation, owned by this piece
    pub shape: Shape,
    /// Top-left anchor of the shape matrix
    pub pos: Position,
}

impl ActivePiece {
    /// Create a piece in its spawn orientation, centered, on `row`
    pub fn new(kind: TetrominoType, row: i32) -> Self {
        let shape = kind.shape();
        Self {
            kind,
            shape,
            pos: Position::new(spawn_col(shape.size()), row),
        }
    }

    /// Absolute (col, row) of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .cells()
            .map(|(x, y)| (self.pos.col + x, self.pos.row + y))
    }

    pub fn fits(&self, board: &Board) -> bool {
        can_place(&self.shape, self.pos, board)
    }

    /// Try to shift by (dcol, drow), returns true if successful
    pub fn try_move(&mut self, dcol: i32, drow: i32, board: &Board) -> bool {
        let target = self.pos.offset(dcol, drow);
        if can_place(&self.shape, target, board) {
            self.pos = target;
            true
        } else {
            false
        }
    }

    /// Try to rotate clockwise in place, returns true if successful
    pub fn rotate(&mut self, board: &Board) -> bool {
        match try_rotate(&self.shape, self.pos, board) {
            Some(rotated) => {
                self.shape = rotated;
                true
            }
            None => false,
        }
    }

    /// Hard drop - move down as far as possible and return distance dropped
    pub fn drop_to_floor(&mut self, board: &Board) -> i32 {
        let mut distance = 0;
        while self.try_move(0, 1, board) {
            distance += 1;
        }
        distance
    }

    /// Row the piece would rest on after a hard drop
    pub fn ghost_row(&self, board: &Board) -> i32 {
        let mut row = self.pos.row;
        while can_place(&self.shape, Position::new(self.pos.col, row + 1), board) {
            row += 1;
        }
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BOARD_HEIGHT, Cell};

    #[test]
    fn test_spawn_position_is_centered() {
        assert_eq!(ActivePiece::new(TetrominoType::I, SPAWN_ROW).pos, Position::new(3, -1));
        assert_eq!(ActivePiece::new(TetrominoType::O, SPAWN_ROW).pos, Position::new(4, -1));
        assert_eq!(ActivePiece::new(TetrominoType::T, SPAWN_ROW).pos, Position::new(3, -1));
    }

    #[test]
    fn test_move_down() {
        let board = Board::new();
        let mut piece = ActivePiece::new(TetrominoType::T, SPAWN_ROW);
        assert!(piece.try_move(0, 1, &board));
        assert_eq!(piece.pos.row, 0);
    }

    #[test]
    fn test_failed_move_leaves_piece_alone() {
        let board = Board::new();
        let mut piece = ActivePiece::new(TetrominoType::O, 0);
        piece.pos.col = 0;
        let before = piece.clone();
        assert!(!piece.try_move(-1, 0, &board));
        assert_eq!(piece, before);
    }

    #[test]
    fn test_hard_drop_lands_on_floor() {
        let board = Board::new();
        let mut piece = ActivePiece::new(TetrominoType::O, SPAWN_ROW);
        let distance = piece.drop_to_floor(&board);
        assert_eq!(piece.pos.row, BOARD_HEIGHT as i32 - 2);
        assert_eq!(distance, BOARD_HEIGHT as i32 - 1);
    }

    #[test]
    fn test_ghost_row_matches_drop_without_moving() {
        let mut board = Board::new();
        board.set(4, 12, Cell::Filled(TetrominoType::J));
        let piece = ActivePiece::new(TetrominoType::O, SPAWN_ROW);
        let ghost = piece.ghost_row(&board);
        assert_eq!(piece.pos.row, SPAWN_ROW);

        let mut dropped = piece.clone();
        dropped.drop_to_floor(&board);
        assert_eq!(ghost, dropped.pos.row);
        assert_eq!(ghost, 10);
    }

    #[test]
    fn test_rotate_keeps_position() {
        let board = Board::new();
        let mut piece = ActivePiece::new(TetrominoType::T, 5);
        let pos = piece.pos;
        assert!(piece.rotate(&board));
        assert_eq!(piece.pos, pos);
        assert_eq!(piece.shape, TetrominoType::T.shape().rotated_cw());
    }
}
