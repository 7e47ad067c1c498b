//! Core game state and logic
//!
//! A session is turn-based: every command is one complete transition.
//! Pacing (gravity ticks, key repeat) belongs to whoever drives it.

use crate::bag::Bag;
use crate::board::Board;
use crate::controller::{PlacementController, Step};
use crate::error::SpawnBlocked;
use crate::piece::ActivePiece;
use crate::queue::{DEFAULT_PREVIEW_LEN, PreviewQueue};
use crate::score::Score;
use crate::tetromino::TetrominoType;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

/// Game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Paused,
    GameOver,
}

/// Input actions the game can process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    Rotate,
    Hold,
    Pause,
}

/// The main game struct
#[derive(Debug, Clone)]
pub struct Game<R = ChaCha8Rng> {
    /// The playfield
    board: Board,
    /// Active piece, hold slot and preview queue
    controller: PlacementController<R>,
    /// Score tracking
    score: Score,
    /// Current game state
    state: GameState,
    /// Score captured when the session ended
    final_score: Option<u64>,
}

impl Game<ChaCha8Rng> {
    /// Create a new game seeded from OS entropy
    pub fn new() -> Self {
        Self::with_bag(Bag::new(), DEFAULT_PREVIEW_LEN)
    }

    /// Create a reproducible game. A `preview_len` of zero is raised to one.
    pub fn with_seed(seed: u64, preview_len: usize) -> Self {
        Self::with_bag(Bag::with_seed(seed), preview_len)
    }
}

impl Default for Game<ChaCha8Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Game<R> {
    /// Create a game drawing pieces from any random source. A `preview_len`
    /// of zero is raised to one.
    pub fn with_rng(rng: R, preview_len: usize) -> Self {
        Self::with_bag(Bag::with_rng(rng), preview_len)
    }

    fn with_bag(bag: Bag<R>, preview_len: usize) -> Self {
        let preview_len = preview_len.max(1);
        let controller = PlacementController::new(PreviewQueue::new(bag, preview_len));
        debug!(first = ?controller.active().kind, preview_len, "session started");
        Self {
            board: Board::new(),
            controller,
            score: Score::new(),
            state: GameState::Playing,
            final_score: None,
        }
    }

    /// Throw away the finished (or running) session and start a fresh one
    pub fn new_session(&mut self) {
        self.board = Board::new();
        self.controller.reset();
        self.score.reset();
        self.state = GameState::Playing;
        self.final_score = None;
        debug!(first = ?self.controller.active().kind, "session started");
    }

    /// Process an action
    pub fn process_action(&mut self, action: Action) {
        match action {
            Action::MoveLeft => self.move_left(),
            Action::MoveRight => self.move_right(),
            Action::SoftDrop => self.soft_drop(),
            Action::HardDrop => self.hard_drop(),
            Action::Rotate => self.rotate(),
            Action::Hold => self.hold(),
            Action::Pause => self.pause_toggle(),
        }
    }

    pub fn move_left(&mut self) {
        if self.is_playing() {
            self.controller.try_move(-1, 0, &self.board);
        }
    }

    pub fn move_right(&mut self) {
        if self.is_playing() {
            self.controller.try_move(1, 0, &self.board);
        }
    }

    /// One row down, locking if the piece has landed
    pub fn soft_drop(&mut self) {
        if !self.is_playing() {
            return;
        }
        match self
            .controller
            .soft_drop_or_lock(&mut self.board, &mut self.score)
        {
            Ok(Step::Moved) => {}
            Ok(Step::Locked { lines_cleared }) => {
                debug!(lines_cleared, score = self.score.points, "tick locked piece");
            }
            Err(blocked) => self.end(blocked),
        }
    }

    /// Gravity: the same transition as a soft drop
    pub fn tick(&mut self) {
        self.soft_drop();
    }

    pub fn hard_drop(&mut self) {
        if !self.is_playing() {
            return;
        }
        if let Err(blocked) = self.controller.hard_drop(&mut self.board, &mut self.score) {
            self.end(blocked);
        }
    }

    pub fn rotate(&mut self) {
        if self.is_playing() {
            self.controller.rotate(&self.board);
        }
    }

    pub fn hold(&mut self) {
        if !self.is_playing() {
            return;
        }
        if let Err(blocked) = self.controller.hold(&self.board) {
            self.end(blocked);
        }
    }

    /// Playing <-> Paused. Has no effect once the game is over.
    pub fn pause_toggle(&mut self) {
        self.state = match self.state {
            GameState::Playing => GameState::Paused,
            GameState::Paused => GameState::Playing,
            GameState::GameOver => GameState::GameOver,
        };
        debug!(state = ?self.state, "pause toggled");
    }

    /// Spawn-blocked ends the session; keep the score it ended with
    fn end(&mut self, _: SpawnBlocked) {
        self.state = GameState::GameOver;
        self.final_score = Some(self.score.points);
        info!(score = self.score.points, lines = self.score.lines, "game over");
    }

    fn is_playing(&self) -> bool {
        self.state == GameState::Playing
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &ActivePiece {
        self.controller.active()
    }

    /// Row the active piece would land on, for drawing the ghost
    pub fn ghost_row(&self) -> i32 {
        self.controller.ghost_row(&self.board)
    }

    /// Upcoming pieces, next first
    pub fn preview(&self) -> impl Iterator<Item = TetrominoType> + '_ {
        self.controller.preview()
    }

    pub fn hold_piece(&self) -> Option<TetrominoType> {
        self.controller.hold_piece()
    }

    pub fn can_hold(&self) -> bool {
        self.controller.can_hold()
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Score at the moment the session ended, if it has
    pub fn final_score(&self) -> Option<u64> {
        self.final_score
    }
}
