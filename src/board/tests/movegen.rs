use super::sq;
use crate::board::{Board, BoardBuilder, Color, PieceKind, Square};

fn sorted(mut squares: Vec<Square>) -> Vec<Square> {
    squares.sort();
    squares
}

#[test]
fn test_starting_position_has_twenty_moves_each() {
    let board = Board::new();
    assert_eq!(board.count_legal_moves(Color::White), 20);
    assert_eq!(board.count_legal_moves(Color::Black), 20);
}

#[test]
fn test_knight_from_corner_file() {
    let board = Board::new();
    assert_eq!(sorted(board.legal_moves(sq("b1"))), vec![sq("a3"), sq("c3")]);
    assert_eq!(sorted(board.legal_moves(sq("g8"))), vec![sq("f6"), sq("h6")]);
}

#[test]
fn test_empty_or_off_board_origin() {
    let board = Board::new();
    assert!(board.legal_moves(sq("e4")).is_empty());
    assert!(board.legal_moves(Square(8, 0)).is_empty());
}

#[test]
fn test_pawn_steps_and_blocking() {
    let board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("e8"), Color::Black, PieceKind::King)
        .piece(sq("c2"), Color::White, PieceKind::Pawn)
        .piece(sq("c4"), Color::Black, PieceKind::Knight)
        .piece(sq("f2"), Color::White, PieceKind::Pawn)
        .piece(sq("f3"), Color::White, PieceKind::Bishop)
        .piece(sq("h3"), Color::White, PieceKind::Pawn)
        .build();

    assert_eq!(board.legal_moves(sq("c2")), vec![sq("c3")]);
    assert!(board.legal_moves(sq("f2")).is_empty());
    assert_eq!(board.legal_moves(sq("h3")), vec![sq("h4")]);
}

#[test]
fn test_pawn_captures_diagonally_only_enemies() {
    let board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("e8"), Color::Black, PieceKind::King)
        .piece(sq("d4"), Color::White, PieceKind::Pawn)
        .piece(sq("c5"), Color::Black, PieceKind::Rook)
        .piece(sq("e5"), Color::White, PieceKind::Knight)
        .build();

    assert_eq!(sorted(board.legal_moves(sq("d4"))), vec![sq("c5"), sq("d5")]);
}

#[test]
fn test_black_pawn_moves_down() {
    let board = Board::new();
    assert_eq!(sorted(board.legal_moves(sq("d7"))), vec![sq("d5"), sq("d6")]);
}

#[test]
fn test_en_passant_requires_eligible_pawn() {
    let eligible = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("e8"), Color::Black, PieceKind::King)
        .piece(sq("e5"), Color::White, PieceKind::Pawn)
        .en_passant_pawn(sq("d5"), Color::Black)
        .build();
    assert!(eligible.legal_moves(sq("e5")).contains(&sq("d6")));

    let stale = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("e8"), Color::Black, PieceKind::King)
        .piece(sq("e5"), Color::White, PieceKind::Pawn)
        .piece(sq("d5"), Color::Black, PieceKind::Pawn)
        .build();
    assert!(!stale.legal_moves(sq("e5")).contains(&sq("d6")));
}

#[test]
fn test_en_passant_exposing_king_is_illegal() {
    let board = BoardBuilder::new()
        .piece(sq("a5"), Color::White, PieceKind::King)
        .piece(sq("b5"), Color::White, PieceKind::Pawn)
        .en_passant_pawn(sq("c5"), Color::Black)
        .piece(sq("h5"), Color::Black, PieceKind::Rook)
        .piece(sq("e8"), Color::Black, PieceKind::King)
        .build();

    let pawn = board.piece_at(sq("b5")).unwrap();
    assert!(pawn.pattern_legal(&board, sq("c6")));
    assert_eq!(board.legal_moves(sq("b5")), vec![sq("b6")]);
}

#[test]
fn test_sliders_stop_at_blockers() {
    let board = BoardBuilder::new()
        .piece(sq("h1"), Color::White, PieceKind::King)
        .piece(sq("h8"), Color::Black, PieceKind::King)
        .piece(sq("a1"), Color::White, PieceKind::Rook)
        .piece(sq("a4"), Color::White, PieceKind::Pawn)
        .piece(sq("d1"), Color::Black, PieceKind::Knight)
        .build();

    assert_eq!(
        sorted(board.legal_moves(sq("a1"))),
        vec![sq("b1"), sq("c1"), sq("d1"), sq("a2"), sq("a3")]
    );
}

#[test]
fn test_queen_in_open_center() {
    let board = BoardBuilder::new()
        .piece(sq("a2"), Color::White, PieceKind::King)
        .piece(sq("h7"), Color::Black, PieceKind::King)
        .piece(sq("d4"), Color::White, PieceKind::Queen)
        .build();
    // 14 orthogonal plus 13 diagonal squares.
    assert_eq!(board.legal_moves(sq("d4")).len(), 27);
}

#[test]
fn test_pinned_rook_stays_on_file() {
    let board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("e2"), Color::White, PieceKind::Rook)
        .piece(sq("e8"), Color::Black, PieceKind::Rook)
        .piece(sq("a8"), Color::Black, PieceKind::King)
        .build();

    let moves = board.legal_moves(sq("e2"));
    assert_eq!(moves.len(), 6);
    assert!(moves.iter().all(|to| to.column() == 4));
    assert!(moves.contains(&sq("e8")));
}

#[test]
fn test_king_avoids_attacked_squares() {
    let board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("d8"), Color::Black, PieceKind::Rook)
        .piece(sq("h8"), Color::Black, PieceKind::King)
        .build();

    let moves = sorted(board.legal_moves(sq("e1")));
    assert_eq!(moves, vec![sq("f1"), sq("e2"), sq("f2")]);
}

#[test]
fn test_king_cannot_step_along_checking_line() {
    let board = BoardBuilder::new()
        .piece(sq("d1"), Color::White, PieceKind::King)
        .piece(sq("a1"), Color::Black, PieceKind::Rook)
        .piece(sq("h8"), Color::Black, PieceKind::King)
        .build();

    let king = board.piece_at(sq("d1")).unwrap();
    assert!(!king.pattern_legal(&board, sq("e1")));
    assert!(!king.pattern_legal(&board, sq("c1")));
    assert!(king.pattern_legal(&board, sq("d2")));
}

#[test]
fn test_king_cannot_take_protected_piece() {
    let board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("e2"), Color::Black, PieceKind::Queen)
        .piece(sq("e8"), Color::Black, PieceKind::Rook)
        .piece(sq("h8"), Color::Black, PieceKind::King)
        .build();

    let king = board.piece_at(sq("e1")).unwrap();
    assert!(!king.pattern_legal(&board, sq("e2")));
    assert!(!board.has_legal_move(Color::White));
}

#[test]
fn test_pattern_legal_rejects_own_square_and_friends() {
    let board = Board::new();
    let rook = board.piece_at(sq("a1")).unwrap();
    assert!(!rook.pattern_legal(&board, sq("a1")));
    assert!(!rook.pattern_legal(&board, sq("a2")));
    assert!(!rook.pattern_legal(&board, Square(0, 9)));
}
