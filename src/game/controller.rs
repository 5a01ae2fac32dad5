//! Turn orchestration.
//!
//! A request flows through pattern legality, king-safety simulation, commit,
//! player bookkeeping and outcome evaluation. Every committed move or castle
//! pushes a snapshot of the state it left onto the history.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::history::{GameSnapshot, HistoryManager};
use super::outcome::Outcome;
use super::persistence::{PersistenceError, SnapshotCodec};
use super::player::Player;
use crate::board::{Board, Color, NotationError, Piece, PieceKind, Square, BOARD_SIZE};

/// Where the game stands between requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GamePhase {
    AwaitingMove,
    /// A pawn stands on its last line and must be promoted before play goes on.
    AwaitingPromotion(Square),
    /// Terminal until a new game, import, load or undo replaces the state.
    GameOver(Outcome),
}

/// Owns the live board, both players and the move history.
#[derive(Clone, Debug)]
pub struct GameController {
    board: Board,
    side_to_move: Color,
    white: Player,
    black: Player,
    phase: GamePhase,
    draw: bool,
    history: HistoryManager,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl GameController {
    /// A game from the standard initial position with default player names.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        Self::from_position(Board::new(), Color::White, config)
    }

    /// A game starting from an arbitrary position, with an empty history.
    ///
    /// The phase is derived from the position, so a board where `side_to_move`
    /// is already mated starts out as game over.
    #[must_use]
    pub fn from_position(board: Board, side_to_move: Color, config: GameConfig) -> Self {
        let white = Player::from_board(Color::White, config.white_name.as_str(), &board);
        let black = Player::from_board(Color::Black, config.black_name.as_str(), &board);
        let mut game = GameController {
            board,
            side_to_move,
            white,
            black,
            phase: GamePhase::AwaitingMove,
            draw: false,
            history: HistoryManager::new(),
        };
        game.conclude();
        game
    }

    /// Throw away the current game and history and start over.
    pub fn new_game(&mut self, white: &str, black: &str) {
        *self = Self::with_config(GameConfig::with_names(white, black));
        game_log!(
            info,
            "new game: {} (White) vs {} (Black)",
            self.white.name(),
            self.black.name()
        );
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    #[inline]
    #[must_use]
    pub fn current_side(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn player(&self, color: Color) -> &Player {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    /// Pieces taken by `color` so far.
    #[must_use]
    pub fn captured(&self, color: Color) -> &[Piece] {
        self.player(color).captured()
    }

    /// Legal destinations of the piece on `square`, recomputed on every call.
    #[must_use]
    pub fn legal_moves(&self, square: Square) -> Vec<Square> {
        self.board.legal_moves(square)
    }

    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.board.is_in_check(color)
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver(_))
    }

    /// True once the game ended in stalemate or insufficient material.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.draw
    }

    /// The side that delivered checkmate, if the game ended that way.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        match self.phase {
            GamePhase::GameOver(Outcome::Checkmate) => Some(self.side_to_move.opponent()),
            _ => None,
        }
    }

    /// Square of the pawn waiting for a promotion choice.
    #[must_use]
    pub fn pending_promotion(&self) -> Option<Square> {
        match self.phase {
            GamePhase::AwaitingPromotion(square) => Some(square),
            _ => None,
        }
    }

    /// Move the piece on `from` to `to` for the side to move.
    ///
    /// A King or Rook sent onto its own castling partner, or an unmoved King
    /// sent two columns sideways, is handled as a castle.
    pub fn request_move(&mut self, from: Square, to: Square) -> Outcome {
        if !from.is_valid() || !to.is_valid() || self.phase != GamePhase::AwaitingMove {
            return Outcome::Failed;
        }
        let side = self.side_to_move;
        let Some(piece) = self.board.piece_at(from) else {
            return Outcome::Failed;
        };
        if piece.color() != side {
            return Outcome::Failed;
        }
        if let Some((king_square, rook_square)) = self.castle_request(&piece, to) {
            return self.attempt_castle(king_square, rook_square);
        }
        if !piece.pattern_legal(&self.board, to)
            || self
                .board
                .simulate_move_and_check_king_safety(side, from, to)
        {
            return Outcome::Failed;
        }

        let before = self.snapshot();
        let is_en_passant =
            piece.kind() == PieceKind::Pawn && from.column() != to.column() && self.board.is_empty(to);

        let (mover, opponent, board) = self.parts(side);
        let Some(mut moving) = board.remove(from) else {
            return Outcome::Failed;
        };
        moving.en_passant_eligible = false;
        mover.expire_en_passant(board);

        if let Some(victim) = board.remove(to) {
            opponent.lose_piece(to);
            mover.record_capture(victim);
        }
        if is_en_passant {
            let victim_square = Square(from.line(), to.column());
            if let Some(victim) = board.remove(victim_square) {
                opponent.lose_piece(victim_square);
                mover.record_capture(victim);
            }
        }

        moving.relocate(to, false);
        board.put(moving);
        mover.relocate_piece(from, to);
        mover.record_move(moving.kind());
        if moving.kind() == PieceKind::Pawn && from.line().abs_diff(to.line()) == 2 {
            mover.mark_en_passant(board, to);
        }

        self.history.save(before);
        self.side_to_move = side.opponent();
        game_log!(debug, "{} {} {} -> {}", side, moving.kind().to_char(), from, to);

        if moving.kind() == PieceKind::Pawn && to.line() == side.promotion_line() {
            self.phase = GamePhase::AwaitingPromotion(to);
            game_log!(debug, "promotion pending on {}", to);
            return Outcome::PromotionPending;
        }
        self.conclude()
    }

    /// Castle the side to move's King with the Rook on `rook_square`.
    ///
    /// Both pieces must be unmoved and share a line. Every square the Rook
    /// crosses, up to and including its destination, must be empty and free
    /// of enemy attack.
    pub fn attempt_castle(&mut self, king_square: Square, rook_square: Square) -> Outcome {
        if self.phase != GamePhase::AwaitingMove {
            return Outcome::Failed;
        }
        let side = self.side_to_move;
        let (Some(king), Some(rook)) = (
            self.board.piece_at(king_square),
            self.board.piece_at(rook_square),
        ) else {
            return Outcome::Failed;
        };
        if !king.is(side, PieceKind::King)
            || !rook.is(side, PieceKind::Rook)
            || king.has_moved()
            || rook.has_moved()
            || king_square.line() != rook_square.line()
        {
            return Outcome::Failed;
        }
        if !self.rook_path_clear(side, king_square, rook_square) {
            return Outcome::Failed;
        }

        let before = self.snapshot();
        let (mover, _, board) = self.parts(side);
        if !board.perform_castle(king_square, rook_square) {
            return Outcome::Failed;
        }
        mover.expire_en_passant(board);
        let toward: isize = if rook_square.column() > king_square.column() { 1 } else { -1 };
        if let (Some(king_to), Some(rook_to)) = (
            king_square.offset(0, 2 * toward),
            king_square.offset(0, toward),
        ) {
            mover.relocate_piece(king_square, king_to);
            mover.relocate_piece(rook_square, rook_to);
        }
        mover.record_move(PieceKind::King);

        self.history.save(before);
        self.side_to_move = side.opponent();
        game_log!(debug, "{} castles with the rook on {}", side, rook_square);
        self.conclude()
    }

    /// Replace the pawn waiting on its last line with `choice`.
    pub fn promote(&mut self, choice: PieceKind) -> Outcome {
        let GamePhase::AwaitingPromotion(square) = self.phase else {
            return Outcome::Failed;
        };
        if !choice.is_promotion_choice() {
            return Outcome::Failed;
        }
        let Some(pawn) = self.board.piece_at(square) else {
            return Outcome::Failed;
        };
        if pawn.kind() != PieceKind::Pawn {
            return Outcome::Failed;
        }
        let promoted = Piece::new(choice, pawn.color(), square).with_moved(true);
        self.board.put(promoted);
        game_log!(debug, "{} pawn on {} promoted to {}", pawn.color(), square, choice.to_char());
        self.conclude()
    }

    /// Step back one committed move. False if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let current = self.snapshot();
        let Some(previous) = self.history.undo(current) else {
            return false;
        };
        self.restore(previous);
        game_log!(debug, "undo, {} to move", self.side_to_move);
        true
    }

    /// Replay one undone move. False if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let current = self.snapshot();
        let Some(next) = self.history.redo(current) else {
            return false;
        };
        self.restore(next);
        game_log!(debug, "redo, {} to move", self.side_to_move);
        true
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    #[must_use]
    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    /// An independent copy of the full game state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.deep_copy(),
            side_to_move: self.side_to_move,
            white_name: self.white.name().to_string(),
            black_name: self.black.name().to_string(),
            draw: self.draw,
            white_captured: self.white.captured().to_vec(),
            black_captured: self.black.captured().to_vec(),
            white_non_pawn_moves: self.white.non_pawn_moves(),
            black_non_pawn_moves: self.black.non_pawn_moves(),
            pending_promotion: self.pending_promotion(),
        }
    }

    /// Replace the live state with `snapshot`. History is left alone.
    pub fn restore(&mut self, snapshot: GameSnapshot) {
        let GameSnapshot {
            board,
            side_to_move,
            white_name,
            black_name,
            draw,
            white_captured,
            black_captured,
            white_non_pawn_moves,
            black_non_pawn_moves,
            pending_promotion,
        } = snapshot;

        self.white = Player::restored(
            Color::White,
            white_name,
            &board,
            white_captured,
            white_non_pawn_moves,
        );
        self.black = Player::restored(
            Color::Black,
            black_name,
            &board,
            black_captured,
            black_non_pawn_moves,
        );
        self.board = board;
        self.side_to_move = side_to_move;
        self.draw = draw;
        self.phase = match pending_promotion {
            Some(square) => GamePhase::AwaitingPromotion(square),
            None => match self.evaluate() {
                outcome if outcome.is_terminal() => GamePhase::GameOver(outcome),
                _ => GamePhase::AwaitingMove,
            },
        };
    }

    /// The position in export notation, side to move first.
    #[must_use]
    pub fn export(&self) -> String {
        self.board.to_notation(self.side_to_move)
    }

    /// Replace the game with an exported position. History is cleared.
    ///
    /// On error the current game is left untouched.
    pub fn import(&mut self, text: &str, white: &str, black: &str) -> Result<(), NotationError> {
        let (side, board) = Board::parse_notation(text).map_err(|err| {
            game_log!(warn, "import rejected: {}", err);
            err
        })?;
        *self = Self::from_position(board, side, GameConfig::with_names(white, black));
        game_log!(info, "imported position, {} to move", side);
        Ok(())
    }

    /// Encode the current state with `codec`.
    pub fn save_snapshot<C: SnapshotCodec>(&self, codec: &C) -> Result<Vec<u8>, PersistenceError> {
        codec.encode(&self.snapshot())
    }

    /// Decode `data` with `codec` and make it the live game. History is cleared.
    ///
    /// The decoded board must hold exactly one King per color, and a pending
    /// promotion must point at a Pawn of the side that just moved, standing on
    /// its last line. On error the current game is left untouched.
    pub fn load_snapshot<C: SnapshotCodec>(
        &mut self,
        codec: &C,
        data: &[u8],
    ) -> Result<(), PersistenceError> {
        let snapshot = codec
            .decode(data)
            .and_then(|snapshot| {
                validate_kings(&snapshot.board)?;
                validate_promotion(&snapshot)?;
                Ok(snapshot)
            })
            .map_err(|err| {
                game_log!(warn, "snapshot load rejected: {}", err);
                err
            })?;
        self.restore(snapshot);
        self.history.reset();
        game_log!(info, "snapshot loaded, {} to move", self.side_to_move);
        Ok(())
    }

    fn parts(&mut self, mover: Color) -> (&mut Player, &mut Player, &mut Board) {
        match mover {
            Color::White => (&mut self.white, &mut self.black, &mut self.board),
            Color::Black => (&mut self.black, &mut self.white, &mut self.board),
        }
    }

    /// The (King, Rook) squares when a move request is really a castle.
    fn castle_request(&self, piece: &Piece, to: Square) -> Option<(Square, Square)> {
        let from = piece.square();
        if let Some(partner) = self.board.piece_at(to) {
            if partner.color() != piece.color() {
                return None;
            }
            return match (piece.kind(), partner.kind()) {
                (PieceKind::King, PieceKind::Rook) => Some((from, to)),
                (PieceKind::Rook, PieceKind::King) => Some((to, from)),
                _ => None,
            };
        }
        if piece.kind() == PieceKind::King
            && !piece.has_moved()
            && from.line() == to.line()
            && from.column().abs_diff(to.column()) == 2
        {
            let rook_column = if to.column() > from.column() { BOARD_SIZE - 1 } else { 0 };
            return Some((from, Square(from.line(), rook_column)));
        }
        None
    }

    fn rook_path_clear(&self, side: Color, king_square: Square, rook_square: Square) -> bool {
        let line = rook_square.line();
        let (king_col, rook_col) = (king_square.column(), rook_square.column());
        let path: Vec<usize> = if rook_col > king_col {
            (king_col + 1..rook_col).collect()
        } else {
            (rook_col + 1..king_col).collect()
        };
        let toward: isize = if rook_col > king_col { 1 } else { -1 };
        let Some(king_to) = king_square.offset(0, 2 * toward) else {
            return false;
        };
        // When the Rook stands next to the King, the King lands past it.
        let king_to_clear = king_to == rook_square
            || path.contains(&king_to.column())
            || (self.board.is_empty(king_to) && !self.board.is_square_threatened(side, king_to));
        king_to_clear
            && path.into_iter().map(|column| Square(line, column)).all(|sq| {
                self.board.is_empty(sq) && !self.board.is_square_threatened(side, sq)
            })
    }

    /// Outcome for the side to move, without touching any state.
    fn evaluate(&self) -> Outcome {
        let side = self.side_to_move;
        if self.board.has_legal_move(side) {
            if Color::BOTH
                .into_iter()
                .all(|color| lacks_mating_material(&self.board, color))
            {
                Outcome::DrawInsufficientMaterial
            } else {
                Outcome::Normal
            }
        } else if self.board.is_in_check(side) {
            Outcome::Checkmate
        } else {
            Outcome::Stalemate
        }
    }

    /// Evaluate and move to the matching phase.
    fn conclude(&mut self) -> Outcome {
        let outcome = self.evaluate();
        if outcome.is_terminal() {
            self.phase = GamePhase::GameOver(outcome);
            self.draw = outcome.is_draw();
            game_log!(info, "game over: {}", outcome);
        } else {
            self.phase = GamePhase::AwaitingMove;
        }
        outcome
    }
}

/// King alone, or King with a single Bishop or a single Knight.
fn lacks_mating_material(board: &Board, color: Color) -> bool {
    let mut minors = 0;
    for piece in board.pieces(color) {
        match piece.kind() {
            PieceKind::Queen | PieceKind::Rook | PieceKind::Pawn => return false,
            PieceKind::Bishop | PieceKind::Knight => minors += 1,
            PieceKind::King => {}
        }
    }
    minors <= 1
}

fn validate_kings(board: &Board) -> Result<(), PersistenceError> {
    for color in Color::BOTH {
        match board.count(color, PieceKind::King) {
            0 => return Err(NotationError::MissingKing { color }.into()),
            1 => {}
            _ => return Err(NotationError::ExtraKing { color }.into()),
        }
    }
    Ok(())
}

fn validate_promotion(snapshot: &GameSnapshot) -> Result<(), PersistenceError> {
    let Some(square) = snapshot.pending_promotion else {
        return Ok(());
    };
    let mover = snapshot.side_to_move.opponent();
    match snapshot.board.piece_at(square) {
        Some(pawn) if pawn.is(mover, PieceKind::Pawn) && square.line() == mover.promotion_line() => {
            Ok(())
        }
        _ => Err(PersistenceError::InvalidPromotion(square)),
    }
}
