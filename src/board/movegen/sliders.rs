use super::super::{Board, Piece, Square};

/// Ray-cast one step at a time in each direction until blocked.
/// A friendly blocker ends the ray, an enemy blocker is its last step.
pub(super) fn destinations(board: &Board, piece: &Piece, directions: &[(isize, isize)]) -> Vec<Square> {
    let mut moves = Vec::new();
    for &(dl, dc) in directions {
        let mut current = piece.square;
        while let Some(next) = current.offset(dl, dc) {
            match board.piece_at(next) {
                None => moves.push(next),
                Some(other) => {
                    if other.color != piece.color {
                        moves.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
    moves
}

pub(super) fn attacks(
    board: &Board,
    piece: &Piece,
    directions: &[(isize, isize)],
    target: Square,
) -> bool {
    for &(dl, dc) in directions {
        let mut current = piece.square;
        while let Some(next) = current.offset(dl, dc) {
            if next == target {
                return true;
            }
            if !board.is_empty(next) {
                break;
            }
            current = next;
        }
    }
    false
}
