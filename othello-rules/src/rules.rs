//! Move legality, captures and the end of the game.
//!
//! Every rule is built on one primitive, [`bracket`]: the run of opponent
//! pieces a move would capture along a single direction. Legality asks
//! whether any direction has a non-empty bracket; applying a move flips the
//! union of all of them.

use crate::board::{Board, Cell, Color};
use crate::location::{Location, LocationList};
use derive_more::{Display, Error};

/// The eight compass directions a capture can run along.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
    ];

    /// Row and column step. Rows grow downwards.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }

    fn step(self, row: usize, col: usize) -> Option<(usize, usize)> {
        let (d_row, d_col) = self.delta();
        Some((row.checked_add_signed(d_row)?, col.checked_add_signed(d_col)?))
    }
}

/// The outcome of a game, computed from the piece counts.
#[derive(Clone, Debug, Display, Eq, PartialEq)]
pub enum GameResult {
    #[display(fmt = "Winner is black player: {}", _0)]
    BlackWins(String),
    #[display(fmt = "Winner is white player: {}", _0)]
    WhiteWins(String),
    #[display(fmt = "It's a tie")]
    Tie,
}

impl GameResult {
    /// The winning color, or None for a tie.
    pub fn winning_color(&self) -> Option<Color> {
        match self {
            GameResult::BlackWins(_) => Some(Color::Black),
            GameResult::WhiteWins(_) => Some(Color::White),
            GameResult::Tie => None,
        }
    }
}

/// Returned by [`apply_move`] when the target is occupied, off the board,
/// or captures nothing.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
#[display(fmt = "illegal move for {} at ({}, {})", color, row, col)]
pub struct IllegalMoveError {
    pub color: Color,
    pub row: usize,
    pub col: usize,
}

/// The opponent pieces captured along `direction` if `color` moves at
/// `(row, col)`. Empty unless the run of opponent pieces is closed by a piece
/// of `color`; running into an empty square or the edge captures nothing.
/// Does not look at the target square itself.
pub fn bracket(
    board: &Board,
    color: Color,
    row: usize,
    col: usize,
    direction: Direction,
) -> LocationList {
    let own = Cell::from(color);
    let opponent = Cell::from(!color);
    let mut run = LocationList::new();
    let mut square = direction.step(row, col);

    while let Some((r, c)) = square {
        match board.get(r, c) {
            cell if cell == opponent => {
                // Squares reading as the opponent are always playable.
                if let Some(loc) = Location::from_coords(r, c) {
                    run.insert(loc);
                }
            }
            cell if cell == own => return run,
            _ => return LocationList::new(),
        }
        square = direction.step(r, c);
    }

    LocationList::new()
}

/// Every opponent piece captured if `color` moves at `(row, col)`.
/// Empty if the move captures nothing.
pub fn flips(board: &Board, color: Color, row: usize, col: usize) -> LocationList {
    Direction::ALL
        .iter()
        .fold(LocationList::new(), |acc, &direction| {
            acc | bracket(board, color, row, col, direction)
        })
}

/// Whether `color` may move at `(row, col)`: the square must be empty and
/// at least one direction must capture. Squares off the board are never legal.
pub fn is_legal_move(board: &Board, color: Color, row: usize, col: usize) -> bool {
    board.get(row, col) == Cell::Empty
        && Direction::ALL
            .iter()
            .any(|&direction| !bracket(board, color, row, col, direction).is_empty())
}

/// All legal moves for `color`, in row-major order.
pub fn legal_moves(board: &Board, color: Color) -> LocationList {
    board
        .squares()
        .filter(|&(loc, _)| is_legal_move(board, color, loc.row(), loc.col()))
        .map(|(loc, _)| loc)
        .collect()
}

/// Make a move for `color`, returning the captured locations.
/// The board is left untouched if the move is not legal.
pub fn apply_move(
    board: &mut Board,
    color: Color,
    row: usize,
    col: usize,
) -> Result<LocationList, IllegalMoveError> {
    if !is_legal_move(board, color, row, col) {
        return Err(IllegalMoveError { color, row, col });
    }
    Ok(apply_move_unchecked(board, color, row, col))
}

/// Place a piece for `color` and flip whatever it brackets, without checking
/// legality. An occupied target is overwritten, and a target that captures
/// nothing just receives the piece.
/// Panics if `(row, col)` is not on the board.
pub fn apply_move_unchecked(
    board: &mut Board,
    color: Color,
    row: usize,
    col: usize,
) -> LocationList {
    let captured = flips(board, color, row, col);

    board.set(row, col, Cell::from(color));
    for loc in captured {
        board.set(loc.row(), loc.col(), Cell::from(color));
    }

    captured
}

/// The game is over once neither color has a legal move.
pub fn is_game_over(board: &Board) -> bool {
    legal_moves(board, Color::Black).is_empty() && legal_moves(board, Color::White).is_empty()
}

/// Compare piece counts. Does not check that the game is over, so this can
/// be used for a provisional result.
pub fn winner(board: &Board, black_name: &str, white_name: &str) -> GameResult {
    let score = board.score();

    if score.black > score.white {
        GameResult::BlackWins(black_name.to_string())
    } else if score.white > score.black {
        GameResult::WhiteWins(white_name.to_string())
    } else {
        GameResult::Tie
    }
}
