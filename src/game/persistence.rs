//! Snapshot persistence.
//!
//! The controller only knows the [`SnapshotCodec`] seam; where the bytes end
//! up is the host's business. [`TextSnapshotCodec`] is a small line-oriented
//! format built on the export notation:
//!
//! ```text
//! chess-snapshot 1
//! position=BLACK,ra8*,ke8*,...,Ke1*
//! white=White Player
//! black=Black Player
//! draw=false
//! white_captured=pd5
//! black_captured=
//! white_non_pawn=0
//! black_non_pawn=2
//! en_passant=e4
//! promotion=-
//! ```

use std::error::Error;
use std::fmt;

use super::history::GameSnapshot;
use crate::board::{Board, Color, NotationError, Piece, PieceKind, Square, SquareError};

const HEADER: &str = "chess-snapshot 1";

/// Errors from encoding or decoding a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// The data is not in the expected format.
    Malformed { line: usize, reason: String },
    /// A required field is absent.
    MissingField(&'static str),
    /// The stored position is not a playable board.
    InvalidPosition(NotationError),
    /// A player name cannot be stored by this codec.
    UnencodableName(String),
    /// The pending promotion square does not hold a pawn that can promote.
    InvalidPromotion(Square),
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::Malformed { line, reason } => {
                write!(f, "Malformed snapshot at line {line}: {reason}")
            }
            PersistenceError::MissingField(field) => {
                write!(f, "Snapshot is missing the '{field}' field")
            }
            PersistenceError::InvalidPosition(err) => write!(f, "Invalid snapshot position: {err}"),
            PersistenceError::UnencodableName(name) => {
                write!(f, "Player name {name:?} cannot be stored")
            }
            PersistenceError::InvalidPromotion(square) => {
                write!(f, "No pawn can promote on {square}")
            }
        }
    }
}

impl Error for PersistenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PersistenceError::InvalidPosition(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NotationError> for PersistenceError {
    fn from(err: NotationError) -> Self {
        PersistenceError::InvalidPosition(err)
    }
}

/// Turns snapshots into bytes and back. Decoding an encoded snapshot must
/// reproduce it exactly.
pub trait SnapshotCodec {
    fn encode(&self, snapshot: &GameSnapshot) -> Result<Vec<u8>, PersistenceError>;
    fn decode(&self, data: &[u8]) -> Result<GameSnapshot, PersistenceError>;
}

/// Line-oriented UTF-8 text encoding.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextSnapshotCodec;

impl SnapshotCodec for TextSnapshotCodec {
    fn encode(&self, snapshot: &GameSnapshot) -> Result<Vec<u8>, PersistenceError> {
        for name in [&snapshot.white_name, &snapshot.black_name] {
            if name.contains(['\n', '\r']) {
                return Err(PersistenceError::UnencodableName(name.clone()));
            }
        }
        let en_passant: Vec<String> = snapshot
            .board
            .all_pieces()
            .filter(|p| p.is_en_passant_eligible())
            .map(|p| p.square().to_string())
            .collect();
        let promotion = snapshot
            .pending_promotion
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        let lines = [
            HEADER.to_string(),
            format!("position={}", snapshot.board.to_notation(snapshot.side_to_move)),
            format!("white={}", snapshot.white_name),
            format!("black={}", snapshot.black_name),
            format!("draw={}", snapshot.draw),
            format!("white_captured={}", join_pieces(&snapshot.white_captured)),
            format!("black_captured={}", join_pieces(&snapshot.black_captured)),
            format!("white_non_pawn={}", snapshot.white_non_pawn_moves),
            format!("black_non_pawn={}", snapshot.black_non_pawn_moves),
            format!("en_passant={}", en_passant.join(",")),
            format!("promotion={promotion}"),
        ];
        let mut text = lines.join("\n");
        text.push('\n');
        Ok(text.into_bytes())
    }

    fn decode(&self, data: &[u8]) -> Result<GameSnapshot, PersistenceError> {
        let text = std::str::from_utf8(data).map_err(|err| PersistenceError::Malformed {
            line: 0,
            reason: err.to_string(),
        })?;
        let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l));

        match lines.next() {
            Some((_, header)) if header.trim() == HEADER => {}
            Some((line, _)) => {
                return Err(PersistenceError::Malformed {
                    line,
                    reason: format!("expected header '{HEADER}'"),
                })
            }
            None => return Err(PersistenceError::MissingField("header")),
        }

        let mut fields = Fields::default();
        for (line, raw) in lines {
            if raw.trim().is_empty() {
                continue;
            }
            let Some((key, value)) = raw.split_once('=') else {
                return Err(malformed(line, "expected key=value"));
            };
            fields.set(line, key.trim(), value)?;
        }
        fields.finish()
    }
}

#[derive(Default)]
struct Fields {
    position: Option<(Color, Board)>,
    white: Option<String>,
    black: Option<String>,
    draw: Option<bool>,
    white_captured: Option<Vec<Piece>>,
    black_captured: Option<Vec<Piece>>,
    white_non_pawn: Option<u32>,
    black_non_pawn: Option<u32>,
    en_passant: Option<(usize, Vec<Square>)>,
    promotion: Option<Option<Square>>,
}

impl Fields {
    fn set(&mut self, line: usize, key: &str, value: &str) -> Result<(), PersistenceError> {
        match key {
            "position" => self.position = Some(Board::parse_notation(value)?),
            "white" => self.white = Some(value.to_string()),
            "black" => self.black = Some(value.to_string()),
            "draw" => {
                let draw = value
                    .trim()
                    .parse::<bool>()
                    .map_err(|_| malformed(line, "draw must be true or false"))?;
                self.draw = Some(draw);
            }
            "white_captured" => self.white_captured = Some(parse_pieces(line, value)?),
            "black_captured" => self.black_captured = Some(parse_pieces(line, value)?),
            "white_non_pawn" => self.white_non_pawn = Some(parse_count(line, value)?),
            "black_non_pawn" => self.black_non_pawn = Some(parse_count(line, value)?),
            "en_passant" => {
                let squares = split_list(value)
                    .map(|token| parse_square(line, token))
                    .collect::<Result<Vec<_>, _>>()?;
                self.en_passant = Some((line, squares));
            }
            "promotion" => {
                let value = value.trim();
                self.promotion = Some(if value == "-" {
                    None
                } else {
                    Some(parse_square(line, value)?)
                });
            }
            other => return Err(malformed(line, &format!("unknown field '{other}'"))),
        }
        Ok(())
    }

    fn finish(self) -> Result<GameSnapshot, PersistenceError> {
        let (side_to_move, mut board) = self
            .position
            .ok_or(PersistenceError::MissingField("position"))?;
        let (en_passant_line, en_passant) =
            self.en_passant.ok_or(PersistenceError::MissingField("en_passant"))?;
        for square in en_passant {
            match board.piece_mut(square) {
                Some(pawn) if pawn.kind() == PieceKind::Pawn => pawn.en_passant_eligible = true,
                _ => {
                    return Err(malformed(
                        en_passant_line,
                        &format!("no pawn on en passant square {square}"),
                    ))
                }
            }
        }

        Ok(GameSnapshot {
            board,
            side_to_move,
            white_name: self.white.ok_or(PersistenceError::MissingField("white"))?,
            black_name: self.black.ok_or(PersistenceError::MissingField("black"))?,
            draw: self.draw.ok_or(PersistenceError::MissingField("draw"))?,
            white_captured: self
                .white_captured
                .ok_or(PersistenceError::MissingField("white_captured"))?,
            black_captured: self
                .black_captured
                .ok_or(PersistenceError::MissingField("black_captured"))?,
            white_non_pawn_moves: self
                .white_non_pawn
                .ok_or(PersistenceError::MissingField("white_non_pawn"))?,
            black_non_pawn_moves: self
                .black_non_pawn
                .ok_or(PersistenceError::MissingField("black_non_pawn"))?,
            pending_promotion: self
                .promotion
                .ok_or(PersistenceError::MissingField("promotion"))?,
        })
    }
}

fn malformed(line: usize, reason: &str) -> PersistenceError {
    PersistenceError::Malformed {
        line,
        reason: reason.to_string(),
    }
}

fn join_pieces(pieces: &[Piece]) -> String {
    pieces
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|t| !t.is_empty())
}

fn parse_pieces(line: usize, value: &str) -> Result<Vec<Piece>, PersistenceError> {
    split_list(value)
        .map(|token| {
            token
                .parse::<Piece>()
                .map_err(|err| malformed(line, &err.to_string()))
        })
        .collect()
}

fn parse_count(line: usize, value: &str) -> Result<u32, PersistenceError> {
    value
        .trim()
        .parse()
        .map_err(|_| malformed(line, "expected a move count"))
}

fn parse_square(line: usize, token: &str) -> Result<Square, PersistenceError> {
    token
        .parse()
        .map_err(|err: SquareError| malformed(line, &err.to_string()))
}
