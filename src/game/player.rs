#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, Piece, PieceKind, Square};

/// Bookkeeping for one side.
///
/// Owned squares and en passant candidates mirror the board; they are
/// rebuilt from it whenever the board is replaced wholesale.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Player {
    color: Color,
    name: String,
    pieces: Vec<Square>,
    captured: Vec<Piece>,
    en_passant_pawns: Vec<Square>,
    non_pawn_moves: u32,
}

impl Player {
    /// A player owning every piece of `color` on `board`, nothing captured yet.
    pub fn from_board(color: Color, name: impl Into<String>, board: &Board) -> Self {
        let mut player = Player {
            color,
            name: name.into(),
            pieces: Vec::new(),
            captured: Vec::new(),
            en_passant_pawns: Vec::new(),
            non_pawn_moves: 0,
        };
        player.rescan(board);
        player
    }

    /// Rebuild from a board plus the history-only fields a board cannot carry.
    pub(crate) fn restored(
        color: Color,
        name: impl Into<String>,
        board: &Board,
        captured: Vec<Piece>,
        non_pawn_moves: u32,
    ) -> Self {
        let mut player = Player::from_board(color, name, board);
        player.captured = captured;
        player.non_pawn_moves = non_pawn_moves;
        player
    }

    #[inline]
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Squares of the pieces this side still has on the board.
    #[must_use]
    pub fn pieces(&self) -> &[Square] {
        &self.pieces
    }

    /// Opponent pieces taken by this side, in capture order.
    #[must_use]
    pub fn captured(&self) -> &[Piece] {
        &self.captured
    }

    /// Symbols of the captured pieces, e.g. `"pnq"` for Black material taken by White.
    #[must_use]
    pub fn captured_symbols(&self) -> String {
        self.captured.iter().map(Piece::symbol).collect()
    }

    #[must_use]
    pub fn en_passant_pawns(&self) -> &[Square] {
        &self.en_passant_pawns
    }

    /// Consecutive moves made without moving a pawn.
    #[must_use]
    pub fn non_pawn_moves(&self) -> u32 {
        self.non_pawn_moves
    }

    /// Re-derive owned squares and en passant candidates from `board`.
    pub(crate) fn rescan(&mut self, board: &Board) {
        self.pieces = board.pieces(self.color).map(|p| p.square()).collect();
        self.en_passant_pawns = board
            .pieces(self.color)
            .filter(|p| p.kind() == PieceKind::Pawn && p.is_en_passant_eligible())
            .map(|p| p.square())
            .collect();
    }

    pub(crate) fn relocate_piece(&mut self, from: Square, to: Square) {
        if let Some(slot) = self.pieces.iter_mut().find(|sq| **sq == from) {
            *slot = to;
        }
    }

    pub(crate) fn lose_piece(&mut self, square: Square) {
        self.pieces.retain(|sq| *sq != square);
        self.en_passant_pawns.retain(|sq| *sq != square);
    }

    pub(crate) fn record_capture(&mut self, mut piece: Piece) {
        piece.en_passant_eligible = false;
        self.captured.push(piece);
    }

    pub(crate) fn record_move(&mut self, kind: PieceKind) {
        if kind == PieceKind::Pawn {
            self.non_pawn_moves = 0;
        } else {
            self.non_pawn_moves += 1;
        }
    }

    /// Drop en passant eligibility from every pawn this side marked earlier.
    pub(crate) fn expire_en_passant(&mut self, board: &mut Board) {
        for square in self.en_passant_pawns.drain(..) {
            if let Some(pawn) = board.piece_mut(square) {
                pawn.en_passant_eligible = false;
            }
        }
    }

    pub(crate) fn mark_en_passant(&mut self, board: &mut Board, square: Square) {
        if let Some(pawn) = board.piece_mut(square) {
            pawn.en_passant_eligible = true;
            self.en_passant_pawns.push(square);
        }
    }
}
