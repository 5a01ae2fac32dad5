//! Move generation.
//!
//! Two layers:
//! - *pattern* moves follow a piece's movement shape and board occupancy but
//!   ignore whether the mover's own King ends up attacked;
//! - *legal* moves are pattern moves that survive
//!   [`Board::simulate_move_and_check_king_safety`].
//!
//! Castling is not part of either list; it goes through the game controller.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attack_tables::{ALL_DIRECTIONS, DIAGONAL, ORTHOGONAL};
use super::{Board, Color, Piece, PieceKind, Square};

impl Piece {
    /// Pattern destinations: shape and blocking respected, same-color squares
    /// excluded, own king safety ignored (the King's own rule aside).
    #[must_use]
    pub fn pattern_destinations(&self, board: &Board) -> Vec<Square> {
        if !self.square.is_valid() {
            return Vec::new();
        }
        match self.kind {
            PieceKind::Pawn => pawns::destinations(board, self),
            PieceKind::Knight => knights::destinations(board, self),
            PieceKind::Bishop => sliders::destinations(board, self, &DIAGONAL),
            PieceKind::Rook => sliders::destinations(board, self, &ORTHOGONAL),
            PieceKind::Queen => sliders::destinations(board, self, &ALL_DIRECTIONS),
            PieceKind::King => kings::destinations(board, self),
        }
    }

    /// True if `target` is one of this piece's pattern destinations.
    #[must_use]
    pub fn pattern_legal(&self, board: &Board, target: Square) -> bool {
        if !target.is_valid() || !self.square.is_valid() || target == self.square {
            return false;
        }
        match self.kind {
            PieceKind::Pawn => pawns::pattern_legal(board, self, target),
            PieceKind::King => kings::pattern_legal(board, self, target),
            _ => self.pattern_destinations(board).contains(&target),
        }
    }

    /// Pattern destinations that do not leave this piece's King threatened.
    #[must_use]
    pub fn legal_moves(&self, board: &Board) -> Vec<Square> {
        self.pattern_destinations(board)
            .into_iter()
            .filter(|&to| !board.simulate_move_and_check_king_safety(self.color, self.square, to))
            .collect()
    }

    /// Attack geometry only: would this piece hit `target` if an enemy stood there?
    ///
    /// Pawns attack their forward diagonals only and Kings their neighbours
    /// only, so threat detection never re-enters king-safety checks.
    pub(crate) fn attacks(&self, board: &Board, target: Square) -> bool {
        if !self.square.is_valid() {
            return false;
        }
        match self.kind {
            PieceKind::Pawn => pawns::attacks(self, target),
            PieceKind::Knight => knights::attacks(self, target),
            PieceKind::Bishop => sliders::attacks(board, self, &DIAGONAL, target),
            PieceKind::Rook => sliders::attacks(board, self, &ORTHOGONAL, target),
            PieceKind::Queen => sliders::attacks(board, self, &ALL_DIRECTIONS, target),
            PieceKind::King => kings::attacks(self, target),
        }
    }
}

impl Board {
    /// Legal destinations of the piece on `from`; empty if the square is empty
    /// or out of range. Recomputed on every call.
    #[must_use]
    pub fn legal_moves(&self, from: Square) -> Vec<Square> {
        self.piece_at(from)
            .map_or_else(Vec::new, |piece| piece.legal_moves(self))
    }

    /// True if any piece of `color` has at least one legal move.
    #[must_use]
    pub fn has_legal_move(&self, color: Color) -> bool {
        self.pieces(color)
            .any(|piece| !piece.legal_moves(self).is_empty())
    }

    /// Total number of legal moves available to `color`.
    #[must_use]
    pub fn count_legal_moves(&self, color: Color) -> usize {
        self.pieces(color)
            .map(|piece| piece.legal_moves(self).len())
            .sum()
    }

    /// True if `square` is hit by any piece of the opponent of `by_opponent_of`.
    #[must_use]
    pub fn is_square_threatened(&self, by_opponent_of: Color, square: Square) -> bool {
        if !square.is_valid() {
            return false;
        }
        self.pieces(by_opponent_of.opponent())
            .any(|piece| piece.attacks(self, square))
    }

    /// True if `color`'s King stands on a threatened square. A board without
    /// that King is never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.find_king(color)
            .is_some_and(|king| self.is_square_threatened(color, king))
    }

    /// Play `from -> to` on a throwaway copy and report whether `mover`'s King
    /// would then be threatened.
    ///
    /// A diagonal pawn step onto an empty square removes the pawn beside it,
    /// as en passant would. Moves that cannot be simulated (empty origin,
    /// off-board squares) count as unsafe. The live board is never touched.
    #[must_use]
    pub fn simulate_move_and_check_king_safety(
        &self,
        mover: Color,
        from: Square,
        to: Square,
    ) -> bool {
        if !to.is_valid() {
            return true;
        }
        let mut scratch = self.deep_copy();
        let Some(mut piece) = scratch.remove(from) else {
            return true;
        };
        if piece.kind == PieceKind::Pawn && from.column() != to.column() && scratch.is_empty(to) {
            scratch.remove(Square(from.line(), to.column()));
        }
        piece.relocate(to, true);
        scratch.put(piece);
        scratch.is_in_check(mover)
    }
}
