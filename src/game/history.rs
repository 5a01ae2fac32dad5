//! Snapshot-based undo/redo.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, Piece, Square};

/// An immutable copy of everything needed to put a game back where it was.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameSnapshot {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) white_name: String,
    pub(crate) black_name: String,
    pub(crate) draw: bool,
    pub(crate) white_captured: Vec<Piece>,
    pub(crate) black_captured: Vec<Piece>,
    pub(crate) white_non_pawn_moves: u32,
    pub(crate) black_non_pawn_moves: u32,
    pub(crate) pending_promotion: Option<Square>,
}

impl GameSnapshot {
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn name(&self, color: Color) -> &str {
        match color {
            Color::White => &self.white_name,
            Color::Black => &self.black_name,
        }
    }

    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.draw
    }

    /// Pieces taken by `color`.
    #[must_use]
    pub fn captured(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.white_captured,
            Color::Black => &self.black_captured,
        }
    }

    #[must_use]
    pub fn non_pawn_moves(&self, color: Color) -> u32 {
        match color {
            Color::White => self.white_non_pawn_moves,
            Color::Black => self.black_non_pawn_moves,
        }
    }

    #[must_use]
    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending_promotion
    }
}

/// Two stacks of snapshots. Saving a new state discards the redo branch.
#[derive(Clone, Debug, Default)]
pub struct HistoryManager {
    undo_stack: Vec<GameSnapshot>,
    redo_stack: Vec<GameSnapshot>,
}

impl HistoryManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the state a move is about to leave.
    pub fn save(&mut self, snapshot: GameSnapshot) {
        self.undo_stack.push(snapshot);
        self.redo_stack.clear();
    }

    /// Step back: `current` goes on the redo stack and the previous state is returned.
    pub fn undo(&mut self, current: GameSnapshot) -> Option<GameSnapshot> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        Some(previous)
    }

    /// Step forward: `current` goes on the undo stack and the next state is returned.
    pub fn redo(&mut self, current: GameSnapshot) -> Option<GameSnapshot> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        Some(next)
    }

    pub fn reset(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    #[inline]
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }
}
