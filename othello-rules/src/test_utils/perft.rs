//! "Perft" move-path enumeration: count the leaves of the game tree at a given depth.
//! A pass counts as a ply, and a position where neither side can move is a leaf.
//! Reference counts: http://www.aartbik.com/MISC/reversi.html

use crate::{Board, Color};

/// Count the leaves `depth` plies below the starting position, black to move.
pub fn run_perft(depth: u64) -> u64 {
    leaves_below(Board::new(), Color::Black, depth, false)
}

fn leaves_below(board: Board, to_move: Color, depth: u64, passed: bool) -> u64 {
    if depth == 0 {
        return 1;
    }

    let all_moves = board.legal_moves(to_move);
    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, !to_move, depth - 1, true);
    }

    all_moves
        .map(|mv| {
            let mut next = board;
            next.apply_move_unchecked(to_move, mv.row(), mv.col());
            leaves_below(next, !to_move, depth - 1, false)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perft_01() {
        assert_eq!(run_perft(1), 4);
    }

    #[test]
    fn perft_02() {
        assert_eq!(run_perft(2), 12);
    }

    #[test]
    fn perft_03() {
        assert_eq!(run_perft(3), 56);
    }
}
