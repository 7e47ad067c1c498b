//! One piece's lifecycle: spawn, move, rotate, drop, lock and hold

use crate::board::{Board, Cell};
use crate::error::SpawnBlocked;
use crate::piece::{ActivePiece, HOLD_SWAP_ROW, SPAWN_ROW};
use crate::queue::PreviewQueue;
use crate::score::Score;
use crate::tetromino::TetrominoType;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// What a one-row drop did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The piece moved down a row
    Moved,
    /// The piece locked and the next one spawned
    Locked { lines_cleared: usize },
}

/// Drives the active piece against the board
#[derive(Debug, Clone)]
pub struct PlacementController<R = ChaCha8Rng> {
    active: ActivePiece,
    hold: Option<TetrominoType>,
    /// Cleared by a hold, set again by the next lock
    can_hold: bool,
    queue: PreviewQueue<R>,
}

impl<R: Rng> PlacementController<R> {
    /// Take the first piece from the queue. The field it enters is assumed
    /// empty, as at the start of a session.
    pub fn new(mut queue: PreviewQueue<R>) -> Self {
        let active = ActivePiece::new(queue.pop(), SPAWN_ROW);
        Self {
            active,
            hold: None,
            can_hold: true,
            queue,
        }
    }

    /// Start over for a new session, keeping the random stream
    pub fn reset(&mut self) {
        self.queue.refill();
        self.active = ActivePiece::new(self.queue.pop(), SPAWN_ROW);
        self.hold = None;
        self.can_hold = true;
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    #[cfg(test)]
    pub(crate) fn set_active(&mut self, piece: ActivePiece) {
        self.active = piece;
    }

    pub fn hold_piece(&self) -> Option<TetrominoType> {
        self.hold
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn preview(&self) -> impl Iterator<Item = TetrominoType> + '_ {
        self.queue.iter()
    }

    /// Bring in the next queued piece. The piece becomes active even when
    /// it does not fit, so the final position can still be shown.
    pub fn spawn(&mut self, board: &Board) -> Result<(), SpawnBlocked> {
        self.active = ActivePiece::new(self.queue.pop(), SPAWN_ROW);
        if self.active.fits(board) {
            Ok(())
        } else {
            Err(SpawnBlocked)
        }
    }

    /// Shift the active piece, returns false and changes nothing if blocked
    pub fn try_move(&mut self, dcol: i32, drow: i32, board: &Board) -> bool {
        self.active.try_move(dcol, drow, board)
    }

    /// Rotate clockwise if the turned shape fits where the piece is
    pub fn rotate(&mut self, board: &Board) -> bool {
        self.active.rotate(board)
    }

    /// Move down one row, or lock where the piece is if it can't
    pub fn soft_drop_or_lock(
        &mut self,
        board: &mut Board,
        score: &mut Score,
    ) -> Result<Step, SpawnBlocked> {
        if self.try_move(0, 1, board) {
            return Ok(Step::Moved);
        }
        let lines_cleared = self.lock(board, score)?;
        Ok(Step::Locked { lines_cleared })
    }

    /// Drop to the resting row and lock once, returns lines cleared
    pub fn hard_drop(&mut self, board: &mut Board, score: &mut Score) -> Result<usize, SpawnBlocked> {
        self.active.drop_to_floor(board);
        self.lock(board, score)
    }

    /// Row the active piece would rest on
    pub fn ghost_row(&self, board: &Board) -> i32 {
        self.active.ghost_row(board)
    }

    /// Set the active piece aside. Returns `Ok(false)` when a hold was
    /// already used since the last lock.
    pub fn hold(&mut self, board: &Board) -> Result<bool, SpawnBlocked> {
        if !self.can_hold {
            return Ok(false);
        }
        self.can_hold = false;

        match self.hold.replace(self.active.kind) {
            None => {
                debug!(held = ?self.active.kind, "hold");
                self.spawn(board)?;
            }
            Some(held) => {
                debug!(held = ?self.active.kind, active = ?held, "hold swap");
                self.active = ActivePiece::new(held, HOLD_SWAP_ROW);
                if !self.active.fits(board) {
                    return Err(SpawnBlocked);
                }
            }
        }
        Ok(true)
    }

    /// Write the active piece into the board, clear lines, score, respawn
    fn lock(&mut self, board: &mut Board, score: &mut Score) -> Result<usize, SpawnBlocked> {
        let cell = Cell::Filled(self.active.kind);
        for (col, row) in self.active.cells() {
            // Rows above the field are skipped by `set`
            board.set(col, row, cell);
        }
        self.can_hold = true;

        let lines_cleared = board.clear_full_rows();
        score.add_clear(lines_cleared);
        debug!(piece = ?self.active.kind, lines_cleared, points = score.points, "locked");

        self.spawn(board)?;
        Ok(lines_cleared)
    }
}
