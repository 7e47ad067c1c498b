//! BLOCKDROP - a falling-block puzzle game core
//!
//! The library holds the rules: playfield, 7-bag randomizer, collision,
//! locking, line clears, hold and scoring. It draws nothing and keeps no
//! time; a front-end calls the [`Game`] commands and re-renders from its
//! queries.

pub mod bag;
pub mod board;
pub mod collision;
pub mod controller;
pub mod error;
pub mod game;
pub mod piece;
pub mod queue;
pub mod score;
pub mod settings;
pub mod tetromino;

pub use board::{BOARD_HEIGHT, BOARD_WIDTH, Board, Cell};
pub use error::{Error, Result, SpawnBlocked};
pub use game::{Action, Game, GameState};
pub use tetromino::{Shape, TetrominoType};
