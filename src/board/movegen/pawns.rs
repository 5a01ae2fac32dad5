use super::super::{Board, Piece, PieceKind, Square};

pub(super) fn destinations(board: &Board, pawn: &Piece) -> Vec<Square> {
    let dir = pawn.color.pawn_direction();
    [(dir, 0), (2 * dir, 0), (dir, -1), (dir, 1)]
        .into_iter()
        .filter_map(|(dl, dc)| pawn.square.offset(dl, dc))
        .filter(|&to| pattern_legal(board, pawn, to))
        .collect()
}

pub(super) fn pattern_legal(board: &Board, pawn: &Piece, target: Square) -> bool {
    let dir = pawn.color.pawn_direction();
    let from = pawn.square;
    let dl = target.line() as isize - from.line() as isize;
    let dc = (target.column() as isize - from.column() as isize).abs();

    if dc == 0 {
        if dl == dir {
            return board.is_empty(target);
        }
        if dl == 2 * dir && from.line() == pawn.color.pawn_start_line() {
            return from
                .offset(dir, 0)
                .is_some_and(|between| board.is_empty(between))
                && board.is_empty(target);
        }
        return false;
    }

    if dc == 1 && dl == dir {
        return match board.piece_at(target) {
            Some(victim) => victim.color != pawn.color,
            None => en_passant_victim(board, pawn, target).is_some(),
        };
    }

    false
}

/// The enemy pawn an en passant capture onto `target` would take: it stands
/// beside the mover, on the mover's line, and double-stepped on the last turn.
fn en_passant_victim(board: &Board, pawn: &Piece, target: Square) -> Option<Piece> {
    board
        .piece_at(Square(pawn.square.line(), target.column()))
        .filter(|beside| {
            beside.kind == PieceKind::Pawn
                && beside.color != pawn.color
                && beside.en_passant_eligible
        })
}

pub(super) fn attacks(pawn: &Piece, target: Square) -> bool {
    let dir = pawn.color.pawn_direction();
    pawn.square.offset(dir, -1) == Some(target) || pawn.square.offset(dir, 1) == Some(target)
}
