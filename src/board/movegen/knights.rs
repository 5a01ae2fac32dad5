use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::{Board, Piece, Square};

pub(super) fn destinations(board: &Board, piece: &Piece) -> Vec<Square> {
    KNIGHT_TARGETS[piece.square.as_index()]
        .iter()
        .copied()
        .filter(|&to| board.piece_at(to).map_or(true, |other| other.color != piece.color))
        .collect()
}

pub(super) fn attacks(piece: &Piece, target: Square) -> bool {
    target.is_valid() && KNIGHT_TARGETS[piece.square.as_index()].contains(&target)
}
