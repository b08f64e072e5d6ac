//! The Othello grid and its read/write primitives.
//!
//! The 8x8 playable area sits inside a 10x10 array whose border is filled
//! with [`Cell::Edge`]. Directional scans stop on that border instead of
//! checking bounds on every step.

use crate::location::{Location, LocationList};
use crate::rules::{self, GameResult, IllegalMoveError};
use crate::{EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt::{self, Formatter};

const PADDED: usize = EDGE_LENGTH + 2;

/// The contents of a single square.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Cell {
    Empty,
    Black,
    White,
    /// Anything outside the playable area.
    Edge,
}

/// One of the two sides in a game.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Color {
    Black,
    White,
}

impl Default for Color {
    /// Gets the starting color (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    /// Gets the opponent.
    fn not(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

impl Cell {
    /// The color occupying this cell, if any.
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
            Cell::Empty | Cell::Edge => None,
        }
    }

    /// Single-character symbol used by the text formats.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'X',
            Cell::White => 'O',
            Cell::Edge => '*',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => f.write_str("black"),
            Color::White => f.write_str("white"),
        }
    }
}

#[derive(Debug, Display, Error, PartialEq, Eq)]
#[display(fmt = "invalid color string (expected \"black\" or \"white\")")]
pub struct ParseColorError;

impl std::str::FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" | "b" | "x" => Ok(Color::Black),
            "white" | "w" | "o" => Ok(Color::White),
            _ => Err(ParseColorError),
        }
    }
}

/// Piece counts for both colors.
#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq)]
#[display(fmt = "black: {}, white: {}", black, white)]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

/// The full grid of an Othello game.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    cells: [[Cell; PADDED]; PADDED],
}

impl Default for Board {
    /// Gets the starting position.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The starting position: black on the (4,4)-(5,5) diagonal,
    /// white on the (4,5)-(5,4) diagonal.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.set(4, 4, Cell::Black);
        board.set(5, 5, Cell::Black);
        board.set(4, 5, Cell::White);
        board.set(5, 4, Cell::White);
        board
    }

    /// A board with every playable square empty.
    pub fn empty() -> Self {
        let mut cells = [[Cell::Edge; PADDED]; PADDED];
        for row in cells.iter_mut().take(EDGE_LENGTH + 1).skip(1) {
            for cell in row.iter_mut().take(EDGE_LENGTH + 1).skip(1) {
                *cell = Cell::Empty;
            }
        }
        Self { cells }
    }

    /// Read a square. Anything off the playable area reads as [`Cell::Edge`].
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        if row >= PADDED || col >= PADDED {
            return Cell::Edge;
        }
        self.cells[row][col]
    }

    /// Write a square. `(row, col)` must be playable and `cell` must not be
    /// [`Cell::Edge`].
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        assert!(
            Location::from_coords(row, col).is_some(),
            "({}, {}) is not a playable square",
            row,
            col
        );
        assert_ne!(cell, Cell::Edge, "cannot place an edge on the board");
        self.cells[row][col] = cell;
    }

    /// Count the pieces of one color.
    pub fn count(&self, color: Color) -> usize {
        let cell = Cell::from(color);
        self.squares().filter(|&(_, c)| c == cell).count()
    }

    /// Count the pieces of both colors.
    pub fn score(&self) -> Score {
        Score {
            black: self.count(Color::Black),
            white: self.count(Color::White),
        }
    }

    /// Count the empty squares.
    pub fn count_empty(&self) -> usize {
        self.squares().filter(|&(_, c)| c == Cell::Empty).count()
    }

    /// Iterate over the playable squares in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = (Location, Cell)> + '_ {
        (0..NUM_SPACES).map(move |index| {
            let loc = Location::from_index(index);
            (loc, self.get(loc.row(), loc.col()))
        })
    }

    /// Serialize the playable area as 64 symbols in row-major order:
    /// `X` for black, `O` for white, `-` for empty.
    pub fn to_compact(&self) -> String {
        self.squares()
            .map(|(_, cell)| match cell {
                Cell::Empty => '-',
                other => other.symbol(),
            })
            .collect()
    }

    /// See [`rules::is_legal_move`].
    pub fn is_legal_move(&self, color: Color, row: usize, col: usize) -> bool {
        rules::is_legal_move(self, color, row, col)
    }

    /// See [`rules::legal_moves`].
    pub fn legal_moves(&self, color: Color) -> LocationList {
        rules::legal_moves(self, color)
    }

    /// See [`rules::flips`].
    pub fn flips(&self, color: Color, row: usize, col: usize) -> LocationList {
        rules::flips(self, color, row, col)
    }

    /// See [`rules::apply_move`].
    pub fn apply_move(
        &mut self,
        color: Color,
        row: usize,
        col: usize,
    ) -> Result<LocationList, IllegalMoveError> {
        rules::apply_move(self, color, row, col)
    }

    /// See [`rules::apply_move_unchecked`].
    pub fn apply_move_unchecked(&mut self, color: Color, row: usize, col: usize) -> LocationList {
        rules::apply_move_unchecked(self, color, row, col)
    }

    /// See [`rules::is_game_over`].
    pub fn is_game_over(&self) -> bool {
        rules::is_game_over(self)
    }

    /// See [`rules::winner`].
    pub fn winner(&self, black_name: &str, white_name: &str) -> GameResult {
        rules::winner(self, black_name, white_name)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "   A B C D E F G H")?;
        for row in 1..=EDGE_LENGTH {
            write!(f, "\n {}", row)?;
            for col in 1..=EDGE_LENGTH {
                write!(f, " {}", self.get(row, col).symbol())?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum ParseBoardError {
    #[display(fmt = "expected {} squares, found {}", NUM_SPACES, found)]
    WrongLength { found: usize },
    #[display(fmt = "unknown square symbol {:?}", symbol)]
    UnknownSymbol { symbol: char },
}

/// Parse the format written by [`Board::to_compact`]. Whitespace is ignored
/// and `.` is accepted for an empty square.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != NUM_SPACES {
            return Err(ParseBoardError::WrongLength {
                found: symbols.len(),
            });
        }

        let mut board = Self::empty();
        for (index, symbol) in symbols.into_iter().enumerate() {
            let cell = match symbol.to_ascii_uppercase() {
                'X' => Cell::Black,
                'O' => Cell::White,
                '-' | '.' => Cell::Empty,
                _ => return Err(ParseBoardError::UnknownSymbol { symbol }),
            };
            let loc = Location::from_index(index);
            board.set(loc.row(), loc.col(), cell);
        }

        Ok(board)
    }
}
