//! Invariants checked over random games.

use othello_rules::test_utils::random_playout;
use othello_rules::{rules, Board, Cell, Color, GameResult, NUM_SPACES};
use rand::rngs::StdRng;
use rand::SeedableRng;

const GAMES: u64 = 50;

fn occupied(board: &Board) -> usize {
    board.count(Color::Black) + board.count(Color::White)
}

#[test]
fn piece_count_never_decreases() {
    for seed in 0..GAMES {
        let playout = random_playout(&mut StdRng::seed_from_u64(seed));

        for pair in playout.positions.windows(2) {
            assert!(occupied(&pair[0]) < occupied(&pair[1]));
            assert!(occupied(&pair[1]) <= NUM_SPACES);
        }
    }
}

#[test]
fn every_move_places_one_and_flips_at_least_one() {
    for seed in 0..GAMES {
        let playout = random_playout(&mut StdRng::seed_from_u64(seed));

        for (pair, &(color, _)) in playout.positions.windows(2).zip(&playout.moves) {
            let before = pair[0].count(color);
            let after = pair[1].count(color);
            assert!(after >= before + 2);
            assert_eq!(
                pair[1].count(!color) + (after - before - 1),
                pair[0].count(!color)
            );
        }
    }
}

#[test]
fn occupied_squares_are_never_legal() {
    for seed in 0..GAMES {
        let playout = random_playout(&mut StdRng::seed_from_u64(seed));

        for board in &playout.positions {
            for color in [Color::Black, Color::White] {
                let moves = board.legal_moves(color);
                assert_eq!(moves, board.legal_moves(color));
                for (loc, cell) in board.squares() {
                    if cell != Cell::Empty {
                        assert!(!moves.contains(loc));
                    }
                }
            }
        }
    }
}

#[test]
fn compact_round_trip_preserves_moves() {
    for seed in 0..GAMES {
        let playout = random_playout(&mut StdRng::seed_from_u64(seed));

        for board in &playout.positions {
            let restored: Board = board.to_compact().parse().unwrap();
            assert_eq!(&restored, board);
            for color in [Color::Black, Color::White] {
                assert_eq!(restored.legal_moves(color), board.legal_moves(color));
            }
        }
    }
}

#[test]
fn finished_games_agree_with_counts() {
    for seed in 0..GAMES {
        let playout = random_playout(&mut StdRng::seed_from_u64(seed));
        let last = playout.positions.last().unwrap();

        assert!(rules::is_game_over(last));
        let score = last.score();
        let expected = if score.black > score.white {
            GameResult::BlackWins("Ann".to_string())
        } else if score.white > score.black {
            GameResult::WhiteWins("Bob".to_string())
        } else {
            GameResult::Tie
        };
        assert_eq!(last.winner("Ann", "Bob"), expected);
    }
}

#[test]
fn playouts_are_reproducible() {
    let first = random_playout(&mut StdRng::seed_from_u64(7));
    let second = random_playout(&mut StdRng::seed_from_u64(7));
    assert_eq!(first.moves, second.moves);
}
