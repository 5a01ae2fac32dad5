//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing the export
//! notation.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let game = BoardBuilder::new()
//!     .piece(Square(0, 4), Color::White, PieceKind::King)
//!     .piece(Square(7, 4), Color::Black, PieceKind::King)
//!     .piece(Square(1, 0), Color::White, PieceKind::Pawn)
//!     .side_to_move(Color::White)
//!     .build_game();
//! assert_eq!(game.current_side(), Color::White);
//! ```

use super::{Board, Color, Piece, PieceKind, Square};
use crate::game::{GameConfig, GameController};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<Piece>,
    side_to_move: Color,
    config: GameConfig,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            config: GameConfig::default(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        builder.pieces = Board::new().all_pieces().collect();
        builder
    }

    /// Place an unmoved piece, replacing anything already on the square.
    #[must_use]
    pub fn piece(self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.with(Piece::new(kind, color, square))
    }

    /// Place a Rook or King that has already moved (no castling with it).
    #[must_use]
    pub fn moved_piece(self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.with(Piece::new(kind, color, square).with_moved(true))
    }

    /// Place a pawn that just double-stepped and can be taken en passant.
    #[must_use]
    pub fn en_passant_pawn(self, square: Square, color: Color) -> Self {
        let mut pawn = Piece::new(PieceKind::Pawn, color, square);
        pawn.en_passant_eligible = true;
        self.with(pawn)
    }

    /// Place a fully specified piece.
    #[must_use]
    pub fn with(mut self, piece: Piece) -> Self {
        self.pieces.retain(|p| p.square != piece.square);
        self.pieces.push(piece);
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|p| p.square != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set player names and other game options used by `build_game`.
    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the board. Pieces off the board are dropped.
    #[must_use]
    pub fn build(&self) -> Board {
        let mut board = Board::empty();
        for piece in &self.pieces {
            if piece.square.is_valid() {
                board.put(*piece);
            }
        }
        board
    }

    /// Build a game controller for this position with the chosen side to move.
    #[must_use]
    pub fn build_game(self) -> GameController {
        let board = self.build();
        GameController::from_position(board, self.side_to_move, self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position() {
        let built = BoardBuilder::starting_position().build();
        assert_eq!(built, Board::new());
    }

    #[test]
    fn test_empty_board() {
        let board = BoardBuilder::new()
            .piece(Square(0, 4), Color::White, PieceKind::King)
            .piece(Square(7, 4), Color::Black, PieceKind::King)
            .build();

        assert!(board.piece_at(Square(0, 4)).is_some());
        assert!(board.piece_at(Square(7, 4)).is_some());
        assert!(board.piece_at(Square(0, 0)).is_none());
        assert_eq!(board.all_pieces().count(), 2);
    }

    #[test]
    fn test_moved_flag() {
        let board = BoardBuilder::new()
            .moved_piece(Square(0, 4), Color::White, PieceKind::King)
            .piece(Square(0, 7), Color::White, PieceKind::Rook)
            .build();

        assert!(board.piece_at(Square(0, 4)).unwrap().has_moved());
        assert!(!board.piece_at(Square(0, 7)).unwrap().has_moved());
    }

    #[test]
    fn test_side_to_move() {
        let game = BoardBuilder::new()
            .piece(Square(0, 4), Color::White, PieceKind::King)
            .piece(Square(7, 4), Color::Black, PieceKind::King)
            .side_to_move(Color::Black)
            .build_game();

        assert_eq!(game.current_side(), Color::Black);
    }

    #[test]
    fn test_clear_square() {
        let board = BoardBuilder::starting_position()
            .clear(Square(0, 0))
            .build();

        assert!(board.piece_at(Square(0, 0)).is_none());
        assert!(board.piece_at(Square(0, 1)).is_some());
    }

    #[test]
    fn test_later_piece_replaces_earlier() {
        let board = BoardBuilder::new()
            .piece(Square(3, 3), Color::White, PieceKind::Rook)
            .piece(Square(3, 3), Color::Black, PieceKind::Knight)
            .build();

        let piece = board.piece_at(Square(3, 3)).unwrap();
        assert!(piece.is(Color::Black, PieceKind::Knight));
    }
}
