//! Code for working with [`Location`]s on the Othello board.

use crate::{EDGE_LENGTH, NUM_SPACES};
use derive_more::{BitOr, BitOrAssign};
use itertools::Itertools;
use std::fmt::{self, Display, Formatter, Write};

const COLUMN_NAMES: &str = "ABCDEFGH";
const ROW_NAMES: &str = "12345678";

/// A playable square, stored as 1-based row and column.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Location {
    row: u8,
    col: u8,
}

/// An ordered set of locations, packed one bit per square with the
/// upper-left square in the most significant bit.
/// Iterating yields the locations in row-major order.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, BitOr, BitOrAssign)]
pub struct LocationList(u64);

impl Location {
    /// Convert from 1-based row and column coordinates.
    /// Returns None unless both are in `1..=8`.
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if (1..=EDGE_LENGTH).contains(&row) && (1..=EDGE_LENGTH).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Convert from a row-major square index: 0 for A1, 63 for H8.
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < NUM_SPACES);
        Self {
            row: (index / EDGE_LENGTH + 1) as u8,
            col: (index % EDGE_LENGTH + 1) as u8,
        }
    }

    /// Convert into a row-major square index.
    pub(crate) fn to_index(self) -> usize {
        (self.row as usize - 1) * EDGE_LENGTH + (self.col as usize - 1)
    }

    pub fn row(self) -> usize {
        self.row as usize
    }

    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Get the 1-based `(row, col)` coordinates.
    pub fn to_coords(self) -> (usize, usize) {
        (self.row(), self.col())
    }

    fn mask(self) -> u64 {
        1 << (NUM_SPACES - 1 - self.to_index())
    }
}

/// Convert this [`Location`] into string notation ("D3": column letter, then row).
impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let col_str = COLUMN_NAMES.chars().nth(self.col() - 1).ok_or(fmt::Error)?;
        let row_str = ROW_NAMES.chars().nth(self.row() - 1).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseLocationError;

impl Display for ParseLocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid location string")
    }
}

impl std::error::Error for ParseLocationError {}

/// Build a [`Location`] from "D3" notation (case-insensitive) or from
/// a whitespace-separated 1-based "row col" pair such as "3 4".
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some((row, col)) = s.split_whitespace().collect_tuple::<(&str, &str)>() {
            let row: usize = row.parse().or(Err(ParseLocationError))?;
            let col: usize = col.parse().or(Err(ParseLocationError))?;
            return Self::from_coords(row, col).ok_or(ParseLocationError);
        }

        let mut chars = s.chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = COLUMN_NAMES.find(col_str).ok_or(ParseLocationError)? + 1;
        let row = chars
            .next()
            .ok_or(ParseLocationError)?
            .to_digit(10)
            .ok_or(ParseLocationError)? as usize;

        if chars.next().is_some() {
            return Err(ParseLocationError);
        }

        Self::from_coords(row, col).ok_or(ParseLocationError)
    }
}

impl LocationList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether this list holds no locations.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns whether `loc` is in this list.
    pub fn contains(self, loc: Location) -> bool {
        self.0 & loc.mask() != 0
    }

    /// Returns whether the 1-based `(row, col)` is in this list.
    /// Coordinates off the board are never contained.
    pub fn contains_coords(self, row: usize, col: usize) -> bool {
        Location::from_coords(row, col).map_or(false, |loc| self.contains(loc))
    }

    pub fn insert(&mut self, loc: Location) {
        self.0 |= loc.mask();
    }

    /// Collect the 1-based coordinates in row-major order.
    pub fn to_coords(self) -> Vec<(usize, usize)> {
        self.map(Location::to_coords).collect()
    }
}

impl ExactSizeIterator for LocationList {
    fn len(&self) -> usize {
        self.0.count_ones() as usize
    }
}

impl Iterator for LocationList {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        if self.0 == 0 {
            return None;
        }

        let next = Location::from_index(self.0.leading_zeros() as usize);
        self.0 ^= next.mask();
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl std::iter::FromIterator<Location> for LocationList {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        let mut list = Self::new();
        for loc in iter {
            list.insert(loc);
        }
        list
    }
}

impl Display for LocationList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.into_iter().join(", "))
    }
}
