//! Error types for board parsing operations.

use std::fmt;

use super::Color;

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Line out of bounds (must be 0-7)
    LineOutOfBounds { line: usize },
    /// Column out of bounds (must be 0-7)
    ColumnOutOfBounds { column: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::LineOutOfBounds { line } => {
                write!(f, "Line {line} out of bounds (must be 0-7)")
            }
            SquareError::ColumnOutOfBounds { column } => {
                write!(f, "Column {column} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for export-notation import failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// Input is empty or only whitespace
    Empty,
    /// First token is not WHITE or BLACK
    InvalidSideToMove { found: String },
    /// Invalid piece symbol in a token
    InvalidPiece { token: String },
    /// Token does not name a square a1-h8
    InvalidSquare { token: String },
    /// Two tokens name the same square
    DuplicateSquare { square: String },
    /// The position has no King of this color
    MissingKing { color: Color },
    /// The position has more than one King of this color
    ExtraKing { color: Color },
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::Empty => write!(f, "Empty game notation"),
            NotationError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected WHITE or BLACK")
            }
            NotationError::InvalidPiece { token } => {
                write!(f, "Invalid piece symbol in token '{token}'")
            }
            NotationError::InvalidSquare { token } => {
                write!(f, "Invalid square in token '{token}'")
            }
            NotationError::DuplicateSquare { square } => {
                write!(f, "Square {square} is occupied twice")
            }
            NotationError::MissingKing { color } => {
                write!(f, "Position has no {color} King")
            }
            NotationError::ExtraKing { color } => {
                write!(f, "Position has more than one {color} King")
            }
        }
    }
}

impl std::error::Error for NotationError {}
