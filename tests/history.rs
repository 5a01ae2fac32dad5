use chess_rules::{
    BoardBuilder, Color, GameController, GamePhase, GameSnapshot, Outcome, PersistenceError,
    PieceKind, SnapshotCodec, Square, TextSnapshotCodec,
};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn play(game: &mut GameController, moves: &[(&str, &str)]) {
    for (from, to) in moves {
        let outcome = game.request_move(sq(from), sq(to));
        assert_ne!(outcome, Outcome::Failed, "{from}->{to} was rejected");
    }
}

#[test]
fn undo_and_redo_walk_the_history() {
    let mut game = GameController::new();
    let start = game.export();
    play(&mut game, &[("e2", "e4"), ("e7", "e5")]);
    let after_two = game.export();

    assert!(game.undo());
    assert!(game.undo());
    assert!(!game.undo());
    assert_eq!(game.export(), start);
    assert_eq!(game.current_side(), Color::White);

    assert!(game.redo());
    assert!(game.redo());
    assert!(!game.redo());
    assert_eq!(game.export(), after_two);
}

#[test]
fn new_move_discards_redo() {
    let mut game = GameController::new();
    play(&mut game, &[("e2", "e4"), ("e7", "e5")]);
    assert!(game.undo());
    assert!(game.can_redo());

    play(&mut game, &[("c7", "c5")]);
    assert!(!game.can_redo());
    assert_eq!(game.history().undo_depth(), 2);
}

#[test]
fn failed_requests_add_no_history() {
    let mut game = GameController::new();
    assert_eq!(game.request_move(sq("e2"), sq("e5")), Outcome::Failed);
    assert_eq!(game.promote(PieceKind::Queen), Outcome::Failed);
    assert!(!game.can_undo());
}

#[test]
fn undo_restores_captured_lists() {
    let mut game = GameController::new();
    play(&mut game, &[("e2", "e4"), ("d7", "d5"), ("e4", "d5"), ("d8", "d5")]);
    assert_eq!(game.captured(Color::White).len(), 1);
    assert_eq!(game.captured(Color::Black).len(), 1);

    assert!(game.undo());
    assert!(game.captured(Color::Black).is_empty());
    assert_eq!(game.player(Color::White).pieces().len(), 16);

    assert!(game.undo());
    assert!(game.captured(Color::White).is_empty());
    assert_eq!(game.player(Color::Black).pieces().len(), 16);

    assert!(game.redo());
    assert!(game.redo());
    assert!(game.captured(Color::Black)[0].is(Color::White, PieceKind::Pawn));
    assert!(game.captured(Color::White)[0].is(Color::Black, PieceKind::Pawn));
}

#[test]
fn undo_restores_en_passant_right() {
    let mut game = GameController::new();
    play(&mut game, &[("a2", "a4"), ("h7", "h6"), ("a4", "a5"), ("b7", "b5")]);
    assert!(game.undo());
    assert!(game.redo());
    assert_eq!(game.request_move(sq("a5"), sq("b6")), Outcome::Normal);
}

#[test]
fn undo_restores_castling_rights() {
    let mut game = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("h1"), Color::White, PieceKind::Rook)
        .piece(sq("e8"), Color::Black, PieceKind::King)
        .piece(sq("a7"), Color::Black, PieceKind::Pawn)
        .build_game();
    assert_eq!(game.request_move(sq("e1"), sq("g1")), Outcome::Normal);
    assert!(game.undo());

    let king = game.piece_at(sq("e1")).unwrap();
    assert!(king.is(Color::White, PieceKind::King) && !king.has_moved());
    assert!(!game.piece_at(sq("h1")).unwrap().has_moved());
    assert_eq!(game.attempt_castle(sq("e1"), sq("h1")), Outcome::Normal);
}

#[test]
fn promotion_is_part_of_its_move() {
    let mut game = BoardBuilder::new()
        .piece(sq("a7"), Color::White, PieceKind::Pawn)
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("e8"), Color::Black, PieceKind::King)
        .piece(sq("h7"), Color::Black, PieceKind::Pawn)
        .build_game();

    assert_eq!(game.request_move(sq("a7"), sq("a8")), Outcome::PromotionPending);
    assert!(game.undo());
    assert_eq!(game.phase(), GamePhase::AwaitingMove);
    assert!(game.piece_at(sq("a7")).unwrap().is(Color::White, PieceKind::Pawn));

    assert!(game.redo());
    assert_eq!(game.pending_promotion(), Some(sq("a8")));
    assert_eq!(game.promote(PieceKind::Rook), Outcome::Normal);
    assert_eq!(game.history().undo_depth(), 1);

    assert!(game.undo());
    assert!(game.piece_at(sq("a8")).is_none());
}

#[test]
fn import_replaces_game_and_clears_history() {
    let mut game = GameController::new();
    play(&mut game, &[("e2", "e4")]);

    game.import("black,Ke1*,Rh1*,ke8*,ra8*", "Ana", "Rui").unwrap();
    assert_eq!(game.current_side(), Color::Black);
    assert!(!game.can_undo());
    assert_eq!(game.player(Color::White).name(), "Ana");
    assert_eq!(game.request_move(sq("e8"), sq("c8")), Outcome::Normal);
    assert_eq!(game.export(), "WHITE,kc8,rd8,Ke1*,Rh1*");
}

#[test]
fn text_snapshot_save_and_load() {
    let mut game = GameController::new();
    play(
        &mut game,
        &[("e2", "e4"), ("d7", "d5"), ("e4", "d5"), ("g8", "f6"), ("g1", "f3")],
    );
    let codec = TextSnapshotCodec;
    let bytes = game.save_snapshot(&codec).unwrap();

    let mut restored = GameController::new();
    play(&mut restored, &[("a2", "a3")]);
    restored.load_snapshot(&codec, &bytes).unwrap();

    assert_eq!(restored.export(), game.export());
    assert_eq!(restored.captured(Color::White), game.captured(Color::White));
    assert_eq!(
        restored.player(Color::White).non_pawn_moves(),
        game.player(Color::White).non_pawn_moves()
    );
    assert!(!restored.can_undo());
    assert_eq!(restored.snapshot(), game.snapshot());
}

#[test]
fn bad_snapshot_leaves_game_intact() {
    let mut game = GameController::new();
    play(&mut game, &[("e2", "e4")]);
    let before = game.snapshot();

    let err = game
        .load_snapshot(&TextSnapshotCodec, b"garbage")
        .unwrap_err();
    assert!(matches!(err, PersistenceError::Malformed { .. }));
    assert_eq!(game.snapshot(), before);
    assert!(game.can_undo());
}

/// Hands back a position with no White King, whatever the input.
struct KinglessCodec;

impl SnapshotCodec for KinglessCodec {
    fn encode(&self, _: &GameSnapshot) -> Result<Vec<u8>, PersistenceError> {
        Ok(Vec::new())
    }

    fn decode(&self, _: &[u8]) -> Result<GameSnapshot, PersistenceError> {
        let game = BoardBuilder::new()
            .piece(sq("a2"), Color::White, PieceKind::Pawn)
            .piece(sq("e8"), Color::Black, PieceKind::King)
            .build_game();
        Ok(game.snapshot())
    }
}

#[test]
fn load_rejects_board_without_king() {
    let mut game = GameController::new();
    let before = game.export();
    let err = game.load_snapshot(&KinglessCodec, &[]).unwrap_err();
    assert!(matches!(err, PersistenceError::InvalidPosition(_)));
    assert_eq!(game.export(), before);
}

#[test]
fn load_rejects_promotion_without_pawn() {
    let codec = TextSnapshotCodec;
    let text = String::from_utf8(GameController::new().save_snapshot(&codec).unwrap()).unwrap();

    let mut game = GameController::new();
    play(&mut game, &[("e2", "e4")]);
    let before = game.snapshot();

    // e1 holds the White King, e2 a pawn that is nowhere near promoting.
    for square in ["e1", "e2", "e4"] {
        let data = text.replace("promotion=-", &format!("promotion={square}"));
        let err = game.load_snapshot(&codec, data.as_bytes()).unwrap_err();
        assert_eq!(err, PersistenceError::InvalidPromotion(sq(square)));
        assert_eq!(game.snapshot(), before);
    }
    assert_eq!(game.promote(PieceKind::Queen), Outcome::Failed);
    assert!(game.piece_at(sq("e1")).unwrap().is(Color::White, PieceKind::King));
}

#[test]
fn load_accepts_pending_promotion() {
    let mut game = BoardBuilder::new()
        .piece(sq("a7"), Color::White, PieceKind::Pawn)
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("e8"), Color::Black, PieceKind::King)
        .piece(sq("h7"), Color::Black, PieceKind::Pawn)
        .build_game();
    assert_eq!(game.request_move(sq("a7"), sq("a8")), Outcome::PromotionPending);
    let bytes = game.save_snapshot(&TextSnapshotCodec).unwrap();

    let mut restored = GameController::new();
    restored.load_snapshot(&TextSnapshotCodec, &bytes).unwrap();
    assert_eq!(restored.pending_promotion(), Some(sq("a8")));
    assert_eq!(restored.promote(PieceKind::Queen), Outcome::Normal);
    assert!(restored.piece_at(sq("a8")).unwrap().is(Color::White, PieceKind::Queen));
}

#[cfg(feature = "serde")]
#[test]
fn snapshot_serde_json_round_trip() {
    let mut game = GameController::new();
    play(&mut game, &[("e2", "e4"), ("d7", "d5"), ("e4", "d5")]);
    let snapshot = game.snapshot();

    let json = serde_json::to_string(&snapshot).unwrap();
    let back: GameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snapshot);
    assert_eq!(back.board(), game.board());
}
