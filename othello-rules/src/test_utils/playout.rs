//! Random self-play, used to check board invariants over many reachable positions.

use crate::{Board, Color, Location};
use rand::seq::IteratorRandom;
use rand::Rng;

/// A finished random game.
#[derive(Clone, Debug)]
pub struct Playout {
    /// Every position reached, starting with the initial board.
    pub positions: Vec<Board>,
    /// The moves made, in order, with passes omitted.
    pub moves: Vec<(Color, Location)>,
}

/// Play uniformly random legal moves from the starting position until
/// neither side can move. A side with no legal move passes.
pub fn random_playout<R: Rng + ?Sized>(rng: &mut R) -> Playout {
    let mut board = Board::new();
    let mut to_move = Color::Black;
    let mut playout = Playout {
        positions: vec![board],
        moves: Vec::new(),
    };

    while !board.is_game_over() {
        if let Some(mv) = board.legal_moves(to_move).choose(rng) {
            board.apply_move_unchecked(to_move, mv.row(), mv.col());
            playout.positions.push(board);
            playout.moves.push((to_move, mv));
        }
        to_move = !to_move;
    }

    playout
}
