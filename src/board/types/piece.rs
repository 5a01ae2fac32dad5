//! Piece, piece kind and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Square;

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds in index order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Parse a kind from its symbol, either case (p, n, b, r, q, k)
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Convert kind to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Symbol with case based on color (uppercase for White)
    #[inline]
    #[must_use]
    pub fn symbol(self, color: Color) -> char {
        let c = self.to_char();
        if color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// Kinds a pawn may be promoted to.
    #[inline]
    #[must_use]
    pub const fn is_promotion_choice(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }

    /// Kinds whose "has moved" flag matters (castling) and is carried in notation.
    #[inline]
    #[must_use]
    pub const fn tracks_moved(self) -> bool {
        matches!(self, PieceKind::Rook | PieceKind::King)
    }
}

/// Promotion choices in order of typical preference (queen first)
pub const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors, White first
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Back line for this color (0 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub const fn back_line(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Pawn forward direction (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> isize {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Pawn starting line (1 for White, 6 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_start_line(self) -> usize {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Farthest line for this color's pawns (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub const fn promotion_line(self) -> usize {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Upper-case label used by the export notation.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Color::White => "WHITE",
            Color::Black => "BLACK",
        }
    }

    /// Parse `WHITE`/`BLACK`, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn from_label(s: &str) -> Option<Color> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("WHITE") {
            Some(Color::White)
        } else if s.eq_ignore_ascii_case("BLACK") {
            Some(Color::Black)
        } else {
            None
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A piece standing on the board.
///
/// Pieces are plain values: cloning a board clones every piece, so a
/// simulation board never shares state with the live one. `moved` only
/// matters for Rooks and Kings and `en_passant_eligible` only for Pawns.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub(crate) color: Color,
    pub(crate) kind: PieceKind,
    pub(crate) square: Square,
    pub(crate) moved: bool,
    pub(crate) en_passant_eligible: bool,
}

impl Piece {
    /// A fresh, unmoved piece.
    #[must_use]
    pub const fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        Piece {
            color,
            kind,
            square,
            moved: false,
            en_passant_eligible: false,
        }
    }

    /// Build a piece from its symbol; the case of the symbol gives the color.
    #[must_use]
    pub fn from_symbol(symbol: char, square: Square) -> Option<Self> {
        let kind = PieceKind::from_char(symbol)?;
        let color = if symbol.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color, square))
    }

    /// Same piece with the "has moved" flag set. Only Rooks and Kings carry it.
    #[must_use]
    pub const fn with_moved(mut self, moved: bool) -> Self {
        self.moved = moved && self.kind.tracks_moved();
        self
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn square(&self) -> Square {
        self.square
    }

    #[inline]
    #[must_use]
    pub const fn has_moved(&self) -> bool {
        self.moved
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant_eligible(&self) -> bool {
        self.en_passant_eligible
    }

    #[inline]
    #[must_use]
    pub fn symbol(&self) -> char {
        self.kind.symbol(self.color)
    }

    #[inline]
    #[must_use]
    pub fn is(&self, color: Color, kind: PieceKind) -> bool {
        self.color == color && self.kind == kind
    }

    /// Relocation bookkeeping: update coordinates and, outside simulation,
    /// flip the one-way moved flag.
    pub(crate) fn relocate(&mut self, to: Square, simulated: bool) {
        self.square = to;
        if !simulated && self.kind.tracks_moved() {
            self.moved = true;
        }
    }
}

impl fmt::Display for Piece {
    /// Notation token: symbol, square, and `*` for an unmoved Rook or King.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.symbol(), self.square)?;
        if self.kind.tracks_moved() && !self.moved {
            write!(f, "*")?;
        }
        Ok(())
    }
}
