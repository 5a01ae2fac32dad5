//! Square type and coordinate helpers.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Number of lines and columns on the board.
pub const BOARD_SIZE: usize = 8;

pub(crate) fn file_to_index(file: char) -> Option<usize> {
    match file {
        'a'..='h' => Some(file as usize - 'a' as usize),
        _ => None,
    }
}

pub(crate) fn rank_to_index(rank: char) -> Option<usize> {
    match rank {
        '1'..='8' => Some(rank as usize - '1' as usize),
        _ => None,
    }
}

/// A square on the board, represented as (line, column).
///
/// Line 0 is White's back rank (rank 1), column 0 is file a. The fields are
/// public so callers can name any coordinate; squares outside the board are
/// treated as "out of range" by every query rather than rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (line, column)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(line: usize, column: usize) -> Option<Self> {
        if line < BOARD_SIZE && column < BOARD_SIZE {
            Some(Square(line, column))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn line(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn column(self) -> usize {
        self.1
    }

    /// True if both coordinates are on the board.
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 < BOARD_SIZE && self.1 < BOARD_SIZE
    }

    /// The square reached by stepping `(dl, dc)`, or `None` if it leaves the board.
    #[must_use]
    pub fn offset(self, dl: isize, dc: isize) -> Option<Square> {
        let line = self.0 as isize + dl;
        let column = self.1 as isize + dc;
        if (0..BOARD_SIZE as isize).contains(&line) && (0..BOARD_SIZE as isize).contains(&column) {
            Some(Square(line as usize, column as usize))
        } else {
            None
        }
    }

    /// Get the square's index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 * BOARD_SIZE + self.1
    }

    /// Create a square from an index (0-63)
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx / BOARD_SIZE, idx % BOARD_SIZE)
    }

    /// All 64 squares, a1 first, h8 last.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE * BOARD_SIZE).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "({}, {})", self.0, self.1);
        }
        write!(f, "{}{}", (self.1 as u8 + b'a') as char, self.0 + 1)
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.0, self.1).cmp(&(other.0, other.1))
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((line, column): (usize, usize)) -> Result<Self, Self::Error> {
        if line >= BOARD_SIZE {
            return Err(SquareError::LineOutOfBounds { line });
        }
        if column >= BOARD_SIZE {
            return Err(SquareError::ColumnOutOfBounds { column });
        }
        Ok(Square(line, column))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let column = file_to_index(file).ok_or_else(invalid)?;
        let line = rank_to_index(rank).ok_or_else(invalid)?;
        Ok(Square(line, column))
    }
}
