use super::super::attack_tables::KING_TARGETS;
use super::super::{Board, Piece, Square};

pub(super) fn destinations(board: &Board, king: &Piece) -> Vec<Square> {
    KING_TARGETS[king.square.as_index()]
        .iter()
        .copied()
        .filter(|&to| pattern_legal(board, king, to))
        .collect()
}

/// One step in any direction, never onto a friendly piece, never onto a
/// threatened square.
///
/// The threat is re-derived with the King already standing on `target`:
/// leaving the origin can open a line for a slider through it.
pub(super) fn pattern_legal(board: &Board, king: &Piece, target: Square) -> bool {
    if !attacks(king, target) {
        return false;
    }
    if board
        .piece_at(target)
        .is_some_and(|other| other.color == king.color)
    {
        return false;
    }

    let mut relocated = board.deep_copy();
    let Some(mut moving) = relocated.remove(king.square) else {
        return false;
    };
    moving.relocate(target, true);
    relocated.put(moving);
    !relocated.is_square_threatened(king.color, target)
}

pub(super) fn attacks(king: &Piece, target: Square) -> bool {
    target.is_valid() && KING_TARGETS[king.square.as_index()].contains(&target)
}
