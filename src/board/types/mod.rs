//! Core chess types.
//!
//! - `Piece`, `PieceKind` and `Color` - pieces on the board
//! - `Square` - (line, column) coordinates

mod piece;
mod square;

pub use piece::{Color, Piece, PieceKind, PROMOTION_CHOICES};
pub use square::{Square, BOARD_SIZE};

pub(crate) use square::{file_to_index, rank_to_index};
