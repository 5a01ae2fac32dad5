//! Board and piece model for standard chess.
//!
//! An 8×8 grid of optional [`Piece`] values with occupancy queries, attack
//! detection, king-safety simulation and the export notation. Turn order,
//! promotion and outcomes live in [`crate::game`].
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Color, Square};
//!
//! let board = Board::new();
//! let e2: Square = "e2".parse().unwrap();
//! assert_eq!(board.legal_moves(e2).len(), 2);
//! assert_eq!(board.count_legal_moves(Color::White), 20);
//! ```

mod attack_tables;
mod builder;
mod error;
mod movegen;
mod notation;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{NotationError, SquareError};
pub use state::Board;
pub use types::{Color, Piece, PieceKind, Square, BOARD_SIZE, PROMOTION_CHOICES};

pub(crate) use types::{file_to_index, rank_to_index};
