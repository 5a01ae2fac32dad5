//! Export/import notation.
//!
//! A comma-separated line: the side to move (`WHITE` or `BLACK`) followed by
//! one token per piece, `<Symbol><file><rank>[*]`. Upper-case symbols are
//! White. A trailing `*` marks a Rook or King that has not moved yet.
//!
//! ```text
//! WHITE,ra8*,ke8*,Ke1*,Ra1*,Pe2
//! ```

use std::str::FromStr;

use super::error::NotationError;
use super::{file_to_index, rank_to_index, Board, Color, Piece, PieceKind, Square, BOARD_SIZE};

impl Board {
    /// Export the position with `side` to move.
    ///
    /// Pieces are listed from rank 8 down to rank 1, files a to h.
    #[must_use]
    pub fn to_notation(&self, side: Color) -> String {
        let mut out = String::from(side.label());
        for line in (0..BOARD_SIZE).rev() {
            for column in 0..BOARD_SIZE {
                if let Some(piece) = self.cells[line][column] {
                    out.push(',');
                    out.push_str(&piece.to_string());
                }
            }
        }
        out
    }

    /// Parse an exported position into the side to move and a fresh board.
    ///
    /// Empty tokens are skipped and a `*` on a kind that carries no moved
    /// flag is ignored. The board must end up with exactly one King per color.
    pub fn parse_notation(text: &str) -> Result<(Color, Board), NotationError> {
        let mut tokens = text.split(',');
        let side_token = tokens
            .next()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(NotationError::Empty)?;
        let side = Color::from_label(side_token).ok_or_else(|| NotationError::InvalidSideToMove {
            found: side_token.to_string(),
        })?;

        let mut board = Board::empty();
        for token in tokens.map(str::trim).filter(|t| !t.is_empty()) {
            let piece = parse_piece_token(token)?;
            if !board.place(piece) {
                return Err(NotationError::DuplicateSquare {
                    square: piece.square.to_string(),
                });
            }
        }

        for color in Color::BOTH {
            match board.count(color, PieceKind::King) {
                0 => return Err(NotationError::MissingKing { color }),
                1 => {}
                _ => return Err(NotationError::ExtraKing { color }),
            }
        }

        Ok((side, board))
    }
}

fn parse_piece_token(token: &str) -> Result<Piece, NotationError> {
    let (body, unmoved) = match token.strip_suffix('*') {
        Some(body) => (body, true),
        None => (token, false),
    };
    let invalid_square = || NotationError::InvalidSquare {
        token: token.to_string(),
    };

    let mut chars = body.chars();
    let symbol = chars.next().ok_or_else(invalid_square)?;
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(invalid_square());
    };
    let column = file_to_index(file).ok_or_else(invalid_square)?;
    let line = rank_to_index(rank).ok_or_else(invalid_square)?;

    let piece = Piece::from_symbol(symbol, Square(line, column)).ok_or_else(|| {
        NotationError::InvalidPiece {
            token: token.to_string(),
        }
    })?;
    Ok(piece.with_moved(!unmoved))
}

impl FromStr for Piece {
    type Err = NotationError;

    /// Parse a single notation token such as `Ke1*` or `pd7`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_piece_token(s.trim())
    }
}
