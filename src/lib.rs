//! Rules engine for standard chess.
//!
//! Owns board state, generates legal moves (castling, en passant and promotion
//! included), decides check, checkmate, stalemate and insufficient material,
//! and keeps a snapshot-based undo/redo history.
//!
//! # Example
//! ```
//! use chess_rules::{GameController, Outcome, Square};
//!
//! let mut game = GameController::new();
//! let e2: Square = "e2".parse().unwrap();
//! let e4: Square = "e4".parse().unwrap();
//! assert_eq!(game.request_move(e2, e4), Outcome::Normal);
//! assert!(game.can_undo());
//! ```

#[macro_use]
mod macros;

pub mod board;
pub mod game;
pub mod sync;

pub use board::{Board, BoardBuilder, Color, NotationError, Piece, PieceKind, Square};
pub use game::{
    GameConfig, GameController, GamePhase, GameSnapshot, HistoryManager, Outcome,
    PersistenceError, Player, SnapshotCodec, TextSnapshotCodec,
};
pub use sync::SharedGame;
