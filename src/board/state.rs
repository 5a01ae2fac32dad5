use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, PieceKind, Square, BOARD_SIZE};

const BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8×8 grid of optional pieces.
///
/// Invariant: a piece stored at `cells[l][c]` has `square == Square(l, c)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// The standard initial position.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (column, kind) in BACK_RANK.iter().enumerate() {
            board.put(Piece::new(*kind, Color::White, Square(0, column)));
            board.put(Piece::new(*kind, Color::Black, Square(7, column)));
            board.put(Piece::new(PieceKind::Pawn, Color::White, Square(1, column)));
            board.put(Piece::new(PieceKind::Pawn, Color::Black, Square(6, column)));
        }
        board
    }

    /// A board with no pieces.
    pub fn empty() -> Self {
        Board {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// The piece on `square`; out-of-range squares are simply empty.
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        if !square.is_valid() {
            return None;
        }
        self.cells[square.0][square.1]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Place a piece on its own square. Fails if the square is off the board or occupied.
    pub fn place(&mut self, piece: Piece) -> bool {
        let sq = piece.square;
        if !sq.is_valid() || self.cells[sq.0][sq.1].is_some() {
            return false;
        }
        self.cells[sq.0][sq.1] = Some(piece);
        true
    }

    /// Remove and return the piece on `square`; no-op when empty or out of range.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        if !square.is_valid() {
            return None;
        }
        self.cells[square.0][square.1].take()
    }

    /// Relocate whatever stands on `from` to `to` without any legality check.
    ///
    /// Anything on `to` is overwritten. Moved flags are left alone, which is
    /// what history replay needs.
    pub fn raw_move(&mut self, from: Square, to: Square) -> Option<Piece> {
        if !to.is_valid() {
            return None;
        }
        let mut piece = self.remove(from)?;
        piece.square = to;
        self.cells[to.0][to.1] = Some(piece);
        Some(piece)
    }

    /// A fully independent copy. Pieces are values, so nothing is shared.
    #[must_use]
    pub fn deep_copy(&self) -> Board {
        self.clone()
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|p| p.kind == PieceKind::King)
            .map(|p| p.square)
    }

    /// Every piece of `color`, scanning a1 to h8.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.all_pieces().filter(move |p| p.color == color)
    }

    /// Every piece on the board, scanning a1 to h8.
    pub fn all_pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.cells.iter().flatten().filter_map(|cell| *cell)
    }

    pub fn count(&self, color: Color, kind: PieceKind) -> usize {
        self.pieces(color).filter(|p| p.kind == kind).count()
    }

    /// Overwrite the cell under the piece's own square.
    pub(crate) fn put(&mut self, piece: Piece) {
        let sq = piece.square;
        debug_assert!(sq.is_valid());
        self.cells[sq.0][sq.1] = Some(piece);
    }

    pub(crate) fn piece_mut(&mut self, square: Square) -> Option<&mut Piece> {
        if !square.is_valid() {
            return None;
        }
        self.cells[square.0][square.1].as_mut()
    }

    /// Castling relocation.
    ///
    /// The King moves two columns toward the Rook and the Rook lands on the
    /// square the King passed over. Both are marked as moved. Returns false
    /// and leaves the board untouched if the squares do not hold a King and
    /// a Rook on the same line, or if either landing square is taken by a
    /// third piece.
    pub fn perform_castle(&mut self, king_square: Square, rook_square: Square) -> bool {
        let (Some(king), Some(rook)) = (self.piece_at(king_square), self.piece_at(rook_square))
        else {
            return false;
        };
        if king.kind != PieceKind::King
            || rook.kind != PieceKind::Rook
            || king_square.line() != rook_square.line()
            || king_square.column() == rook_square.column()
        {
            return false;
        }
        let toward: isize = if rook_square.column() > king_square.column() {
            1
        } else {
            -1
        };
        let (Some(king_to), Some(rook_to)) = (
            king_square.offset(0, 2 * toward),
            king_square.offset(0, toward),
        ) else {
            return false;
        };

        let free = |sq: Square| sq == king_square || sq == rook_square || self.is_empty(sq);
        if !free(king_to) || !free(rook_to) {
            return false;
        }

        let (mut king, mut rook) = (king, rook);
        self.cells[king_square.0][king_square.1] = None;
        self.cells[rook_square.0][rook_square.1] = None;
        king.relocate(king_to, false);
        rook.relocate(rook_to, false);
        self.put(king);
        self.put(rook);
        true
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    /// ASCII diagram, rank 8 at the top; `.` marks an empty square.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for line in (0..BOARD_SIZE).rev() {
            write!(f, "{} ", line + 1)?;
            for column in 0..BOARD_SIZE {
                let c = self.cells[line][column].map_or('.', |p| p.symbol());
                write!(f, "{c} ")?;
            }
            writeln!(f, "{}", line + 1)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
