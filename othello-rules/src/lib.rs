//! `othello-rules` is a small, exact Othello rules engine for front ends and tests.
//!
//! This package implements three levels of abstraction:
//!
//!  - [`rules`] contains the free functions that decide legality, compute captures
//!    and detect the end of the game. [`rules::apply_move_unchecked`] skips all
//!    validation and may leave a board no legal game could reach.
//!  - [`Board`] owns the grid and exposes the same rules as methods.
//!  - [`Game`] is a session: two named players, checked moves and the final result.
//!
//! Coordinates are 1-based `(row, col)` pairs in `1..=8`. Anything outside
//! that range reads as [`Cell::Edge`] and is never a legal move.

pub mod rules;
pub mod test_utils;

mod board;
mod game;
mod location;

pub use board::*;
pub use game::*;
pub use location::*;
pub use rules::{GameResult, IllegalMoveError};

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
