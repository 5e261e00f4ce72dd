//! Move generation and legality tests.

use super::{find_move, find_promotion, moves_from, try_find_move};
use crate::board::{
    apply_move, BoardBuilder, Board, CastleSide, Color, PieceKind, Square,
};

#[test]
fn initial_position_has_twenty_moves() {
    let mut board = Board::new();
    assert_eq!(board.legal_moves(Color::White).len(), 20);
}

#[test]
fn black_has_twenty_moves_after_e4() {
    let mut board = Board::new();
    let mv = find_move(&mut board, Color::White, "e2", "e4");
    apply_move(&mut board, &mv);
    assert_eq!(board.legal_moves(Color::Black).len(), 20);
}

#[test]
fn pawn_double_push_requires_both_squares_empty() {
    // Blocker on e3 stops both pushes; blocker on e4 only the double.
    let mut blocked_near = BoardBuilder::new()
        .piece_at("e1", PieceKind::King, Color::White)
        .piece_at("e8", PieceKind::King, Color::Black)
        .piece_at("e2", PieceKind::Pawn, Color::White)
        .piece_at("e3", PieceKind::Knight, Color::Black)
        .build();
    assert!(moves_from(&mut blocked_near, Color::White, "e2").is_empty());

    let mut blocked_far = BoardBuilder::new()
        .piece_at("e1", PieceKind::King, Color::White)
        .piece_at("e8", PieceKind::King, Color::Black)
        .piece_at("e2", PieceKind::Pawn, Color::White)
        .piece_at("e4", PieceKind::Knight, Color::Black)
        .build();
    let moves = moves_from(&mut blocked_far, Color::White, "e2");
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].to, Square::parse("e3").unwrap());
}

#[test]
fn castling_rejected_when_crossed_square_attacked() {
    // f1 is covered by the rook on f8, so O-O is illegal even though
    // the king is not in check and the path is clear.
    let mut board = BoardBuilder::new()
        .piece_at("e1", PieceKind::King, Color::White)
        .piece_at("h1", PieceKind::Rook, Color::White)
        .piece_at("e8", PieceKind::King, Color::Black)
        .piece_at("f8", PieceKind::Rook, Color::Black)
        .castle(Color::White, CastleSide::King)
        .build();
    assert!(try_find_move(&mut board, Color::White, "e1", "g1").is_none());

    // Without the attacker the same position castles fine.
    let mut board = BoardBuilder::new()
        .piece_at("e1", PieceKind::King, Color::White)
        .piece_at("h1", PieceKind::Rook, Color::White)
        .piece_at("e8", PieceKind::King, Color::Black)
        .castle(Color::White, CastleSide::King)
        .build();
    let castle = find_move(&mut board, Color::White, "e1", "g1");
    assert!(castle.is_castling);
}

#[test]
fn castling_rejected_when_king_in_check() {
    let mut board = BoardBuilder::new()
        .piece_at("e1", PieceKind::King, Color::White)
        .piece_at("h1", PieceKind::Rook, Color::White)
        .piece_at("e8", PieceKind::King, Color::Black)
        .piece_at("e5", PieceKind::Rook, Color::Black)
        .castle(Color::White, CastleSide::King)
        .build();
    assert!(try_find_move(&mut board, Color::White, "e1", "g1").is_none());
}

#[test]
fn castling_rejected_without_right_or_rook() {
    let mut no_right = BoardBuilder::new()
        .piece_at("e1", PieceKind::King, Color::White)
        .piece_at("h1", PieceKind::Rook, Color::White)
        .piece_at("e8", PieceKind::King, Color::Black)
        .build();
    assert!(try_find_move(&mut no_right, Color::White, "e1", "g1").is_none());

    let mut no_rook = BoardBuilder::new()
        .piece_at("e1", PieceKind::King, Color::White)
        .piece_at("e8", PieceKind::King, Color::Black)
        .castle(Color::White, CastleSide::King)
        .build();
    assert!(try_find_move(&mut no_rook, Color::White, "e1", "g1").is_none());
}

#[test]
fn queenside_castling_checks_its_own_squares() {
    // b1 may be attacked: the king never crosses it.
    let mut board = BoardBuilder::new()
        .piece_at("e1", PieceKind::King, Color::White)
        .piece_at("a1", PieceKind::Rook, Color::White)
        .piece_at("e8", PieceKind::King, Color::Black)
        .piece_at("b8", PieceKind::Rook, Color::Black)
        .castle(Color::White, CastleSide::Queen)
        .build();
    let castle = find_move(&mut board, Color::White, "e1", "c1");
    assert!(castle.is_castling);

    // d1 attacked: illegal.
    let mut board = BoardBuilder::new()
        .piece_at("e1", PieceKind::King, Color::White)
        .piece_at("a1", PieceKind::Rook, Color::White)
        .piece_at("e8", PieceKind::King, Color::Black)
        .piece_at("d8", PieceKind::Rook, Color::Black)
        .castle(Color::White, CastleSide::Queen)
        .build();
    assert!(try_find_move(&mut board, Color::White, "e1", "c1").is_none());
}

#[test]
fn en_passant_window_opens_and_closes() {
    let mut board = BoardBuilder::new()
        .piece_at("e1", PieceKind::King, Color::White)
        .piece_at("e8", PieceKind::King, Color::Black)
        .piece_at("e5", PieceKind::Pawn, Color::White)
        .piece_at("d7", PieceKind::Pawn, Color::Black)
        .side_to_move(Color::Black)
        .build();

    let push = find_move(&mut board, Color::Black, "d7", "d5");
    apply_move(&mut board, &push);
    assert_eq!(board.en_passant_file(Color::White), Some(3));

    let capture = find_move(&mut board, Color::White, "e5", "d6");
    assert!(capture.is_en_passant);

    // Taking it removes the black pawn from d5.
    let mut taken = board.clone();
    let record = apply_move(&mut taken, &capture);
    assert!(taken.piece_at(3, 3).is_none());
    assert_eq!(record.captured().map(|p| p.kind), Some(PieceKind::Pawn));

    // Any other move instead closes the window.
    let other = find_move(&mut board, Color::White, "e1", "d1");
    apply_move(&mut board, &other);
    assert_eq!(board.en_passant_file(Color::White), None);
    assert!(try_find_move(&mut board, Color::White, "e5", "d6").is_none());
}

#[test]
fn en_passant_not_offered_to_distant_pawns() {
    let mut board = BoardBuilder::new()
        .piece_at("e1", PieceKind::King, Color::White)
        .piece_at("e8", PieceKind::King, Color::Black)
        .piece_at("g5", PieceKind::Pawn, Color::White)
        .piece_at("d7", PieceKind::Pawn, Color::Black)
        .side_to_move(Color::Black)
        .build();
    let push = find_move(&mut board, Color::Black, "d7", "d5");
    apply_move(&mut board, &push);
    // No white pawn stands beside d5, so no right was granted.
    assert_eq!(board.en_passant_file(Color::White), None);
}

#[test]
fn promotion_fans_out_to_queen_and_knight() {
    let mut board = BoardBuilder::new()
        .piece_at("h1", PieceKind::King, Color::White)
        .piece_at("b4", PieceKind::King, Color::Black)
        .piece_at("e7", PieceKind::Pawn, Color::White)
        .build();
    let promos = moves_from(&mut board, Color::White, "e7");
    assert_eq!(promos.len(), 2);
    let kinds: Vec<_> = promos.iter().map(|mv| mv.promotion).collect();
    assert!(kinds.contains(&Some(PieceKind::Queen)));
    assert!(kinds.contains(&Some(PieceKind::Knight)));

    let queen = find_promotion(&mut board, Color::White, "e7", "e8", PieceKind::Queen);
    apply_move(&mut board, &queen);
    assert!(board.is_at(4, 0, PieceKind::Queen, Color::White));
    assert!(board.piece_at(4, 1).is_none());
}

#[test]
fn moves_leaving_king_in_check_are_filtered() {
    // The d2 rook is pinned by the d8 rook: it may slide along the
    // d-file but never leave it.
    let mut board = BoardBuilder::new()
        .piece_at("d1", PieceKind::King, Color::White)
        .piece_at("d2", PieceKind::Rook, Color::White)
        .piece_at("d8", PieceKind::Rook, Color::Black)
        .piece_at("h8", PieceKind::King, Color::Black)
        .build();
    let rook_moves = moves_from(&mut board, Color::White, "d2");
    assert!(!rook_moves.is_empty());
    assert!(rook_moves.iter().all(|mv| mv.to.file == 3));
}

#[test]
fn gives_check_flag_is_set() {
    let mut board = BoardBuilder::new()
        .piece_at("e1", PieceKind::King, Color::White)
        .piece_at("a1", PieceKind::Rook, Color::White)
        .piece_at("h8", PieceKind::King, Color::Black)
        .build();
    let check = find_move(&mut board, Color::White, "a1", "a8");
    assert!(check.gives_check);
    let quiet = find_move(&mut board, Color::White, "a1", "b1");
    assert!(!quiet.gives_check);
}

#[test]
fn evasion_flag_marks_check_replies() {
    let mut board = BoardBuilder::new()
        .piece_at("e1", PieceKind::King, Color::White)
        .piece_at("e8", PieceKind::Rook, Color::Black)
        .piece_at("a8", PieceKind::King, Color::Black)
        .build();
    let moves = board.legal_moves(Color::White);
    assert!(!moves.is_empty());
    assert!(moves.iter().all(|mv| mv.is_evasion));
}

#[test]
fn check_detection_matches_attack_detection() {
    use crate::board::{king_in_check, square_attacked_by};

    let board = BoardBuilder::new()
        .piece_at("e1", PieceKind::King, Color::White)
        .piece_at("e8", PieceKind::Rook, Color::Black)
        .piece_at("a8", PieceKind::King, Color::Black)
        .build();
    assert!(king_in_check(&board, Color::White));
    assert_eq!(
        king_in_check(&board, Color::White),
        square_attacked_by(&board, Square::parse("e1").unwrap(), Color::White)
    );
    assert!(!king_in_check(&board, Color::Black));

    // Every attacker kind in turn: pawn, knight, bishop, queen, king
    // adjacency never counts as check for the attacked king itself.
    let pawn_check = BoardBuilder::new()
        .piece_at("e4", PieceKind::King, Color::White)
        .piece_at("d5", PieceKind::Pawn, Color::Black)
        .piece_at("a8", PieceKind::King, Color::Black)
        .build();
    assert!(king_in_check(&pawn_check, Color::White));

    let knight_check = BoardBuilder::new()
        .piece_at("e4", PieceKind::King, Color::White)
        .piece_at("f6", PieceKind::Knight, Color::Black)
        .piece_at("a8", PieceKind::King, Color::Black)
        .build();
    assert!(king_in_check(&knight_check, Color::White));

    let blocked_bishop = BoardBuilder::new()
        .piece_at("e4", PieceKind::King, Color::White)
        .piece_at("h7", PieceKind::Bishop, Color::Black)
        .piece_at("g6", PieceKind::Pawn, Color::White)
        .piece_at("a8", PieceKind::King, Color::Black)
        .build();
    assert!(!king_in_check(&blocked_bishop, Color::White));
}

#[test]
fn mobility_counts_slider_targets() {
    let board = BoardBuilder::new()
        .piece_at("a1", PieceKind::Rook, Color::White)
        .piece_at("e1", PieceKind::King, Color::White)
        .piece_at("e8", PieceKind::King, Color::Black)
        .build();
    // a-file (7) plus b1..d1 (3); e1 blocked by the own king.
    assert_eq!(board.mobility(Square::parse("a1").unwrap()), 10);
}
