//! Game state machine tests.

use super::find_move;
use crate::board::{
    apply_move, game_status, is_check_mate, is_stale_mate, Board, BoardBuilder, Color,
    GameState, GameStatus, PieceKind, PositionHistory,
};

fn play(board: &mut Board, history: &mut PositionHistory, color: Color, from: &str, to: &str) {
    let mv = find_move(board, color, from, to);
    apply_move(board, &mv);
    history.record(board);
}

#[test]
fn fools_mate_is_checkmate_for_black() {
    let mut board = Board::new();
    let mut history = PositionHistory::new();
    history.record(&board);

    play(&mut board, &mut history, Color::White, "f2", "f3");
    play(&mut board, &mut history, Color::Black, "e7", "e5");
    play(&mut board, &mut history, Color::White, "g2", "g4");
    play(&mut board, &mut history, Color::Black, "d8", "h4");

    assert!(is_check_mate(&mut board, Color::White));
    let status = game_status(&mut board, &history);
    assert_eq!(
        status,
        GameStatus::Checkmate {
            winner: Color::Black
        }
    );
    assert_eq!(status.to_state(), GameState::BlackWins);
}

#[test]
fn queen_stalemate_is_a_draw() {
    let mut board = BoardBuilder::new()
        .piece_at("a8", PieceKind::King, Color::Black)
        .piece_at("c7", PieceKind::Queen, Color::White)
        .piece_at("b6", PieceKind::King, Color::White)
        .side_to_move(Color::Black)
        .build();
    assert!(is_stale_mate(&mut board, Color::Black));
    assert!(!is_check_mate(&mut board, Color::Black));
    let history = PositionHistory::new();
    let status = game_status(&mut board, &history);
    assert_eq!(status, GameStatus::Stalemate);
    assert_eq!(status.to_state(), GameState::Stalemate);
}

#[test]
fn fifty_move_rule_is_claimable() {
    let mut board = BoardBuilder::new()
        .piece_at("e1", PieceKind::King, Color::White)
        .piece_at("e8", PieceKind::King, Color::Black)
        .piece_at("a1", PieceKind::Rook, Color::White)
        .fifty_move_count(100)
        .build();
    let history = PositionHistory::new();
    assert_eq!(game_status(&mut board, &history), GameStatus::FiftyMoveDraw);

    let mut fresh = BoardBuilder::new()
        .piece_at("e1", PieceKind::King, Color::White)
        .piece_at("e8", PieceKind::King, Color::Black)
        .piece_at("a1", PieceKind::Rook, Color::White)
        .fifty_move_count(99)
        .build();
    assert_eq!(game_status(&mut fresh, &history), GameStatus::InPlay);
}

#[test]
fn threefold_repetition_by_knight_shuffle() {
    let mut board = Board::new();
    let mut history = PositionHistory::new();
    history.record(&board);

    for _ in 0..2 {
        play(&mut board, &mut history, Color::White, "g1", "f3");
        play(&mut board, &mut history, Color::Black, "g8", "f6");
        play(&mut board, &mut history, Color::White, "f3", "g1");
        play(&mut board, &mut history, Color::Black, "f6", "g8");
    }

    // The starting placement has now been on the board three times.
    assert_eq!(history.occurrences(&board), 3);
    assert!(history.is_threefold(&board));
    assert_eq!(game_status(&mut board, &history), GameStatus::ThreefoldDraw);
}

#[test]
fn repetition_needs_identical_rights() {
    // Same placement, different castling rights: quick equality holds,
    // the full comparison the repetition rule uses does not.
    let with_rights = BoardBuilder::new()
        .piece_at("e1", PieceKind::King, Color::White)
        .piece_at("h1", PieceKind::Rook, Color::White)
        .piece_at("e8", PieceKind::King, Color::Black)
        .all_castling_rights()
        .build();
    let without_rights = BoardBuilder::new()
        .piece_at("e1", PieceKind::King, Color::White)
        .piece_at("h1", PieceKind::Rook, Color::White)
        .piece_at("e8", PieceKind::King, Color::Black)
        .build();
    assert!(with_rights.equals(&without_rights, true));
    assert!(!with_rights.equals(&without_rights, false));

    let mut history = PositionHistory::new();
    history.record(&with_rights);
    history.record(&with_rights);
    history.record(&without_rights);
    assert_eq!(history.occurrences(&with_rights), 2);
    assert_eq!(history.occurrences(&without_rights), 1);
}

#[test]
fn ongoing_game_is_in_play() {
    let mut board = Board::new();
    let history = PositionHistory::new();
    assert_eq!(game_status(&mut board, &history), GameStatus::InPlay);
}
