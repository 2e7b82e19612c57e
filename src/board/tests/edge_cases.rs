//! Edge case tests for special chess positions and moves.

use super::{find_move, sq};
use crate::board::{CastleSide, Color, MoveKind, Piece, PieceType, Position};

fn legal_from(position: &mut Position, from: &str) -> Vec<String> {
    let mut moves: Vec<String> = position
        .legal_moves_from(sq(from))
        .iter()
        .map(ToString::to_string)
        .collect();
    moves.sort();
    moves
}

fn play(position: &mut Position, line: &[&str]) {
    for uci in line {
        let _ = position.play_uci(uci).unwrap();
    }
}

#[test]
fn test_stalemate_position() {
    let mut position = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(!position.is_checkmate());
    assert!(position.is_stalemate());
    assert!(position.generate_legal_moves().is_empty());
}

#[test]
fn test_all_promotion_pieces_offered() {
    let mut position = Position::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
    let promotions: Vec<Option<PieceType>> = position
        .legal_moves_from(sq("a7"))
        .iter()
        .map(|m| m.promotion())
        .collect();
    assert_eq!(
        promotions,
        vec![
            Some(PieceType::Queen),
            Some(PieceType::Rook),
            Some(PieceType::Bishop),
            Some(PieceType::Knight)
        ]
    );

    let mv = find_move(&mut position, "a7", "a8", Some(PieceType::Knight));
    let _undo = position.make_move(mv);
    assert_eq!(
        position.piece_at(sq("a8")),
        Some(Piece::new(PieceType::Knight, Color::White))
    );
}

#[test]
fn test_en_passant_removes_correct_pawn() {
    let mut position =
        Position::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 1")
            .unwrap();
    let mv = find_move(&mut position, "e5", "d6", None);
    assert_eq!(mv.kind, MoveKind::EnPassant);

    let undo = position.make_move(mv);
    assert!(
        position.piece_at(sq("d5")).is_none(),
        "Captured pawn should be removed"
    );
    assert_eq!(
        position.piece_at(sq("d6")),
        Some(Piece::new(PieceType::Pawn, Color::White)),
        "Capturing pawn should be on d6"
    );

    position.unmake_move(mv, undo);
    assert_eq!(
        position.piece_at(sq("d5")),
        Some(Piece::new(PieceType::Pawn, Color::Black)),
        "Black pawn should be restored"
    );
    assert!(position.piece_at(sq("d6")).is_none());
}

#[test]
fn test_en_passant_window_is_one_ply() {
    let mut position = Position::new();
    play(&mut position, &["e2e4", "a7a6", "e4e5", "d7d5"]);
    assert_eq!(position.en_passant_square(), Some(sq("d6")));
    assert!(legal_from(&mut position, "e5").contains(&"e5d6".to_string()));

    play(&mut position, &["a2a3", "a6a5"]);
    assert_eq!(position.en_passant_square(), None);
    assert_eq!(legal_from(&mut position, "e5"), vec!["e5e6"]);
}

#[test]
fn test_en_passant_square_only_after_double_push() {
    let mut position = Position::new();
    play(&mut position, &["e2e3"]);
    assert_eq!(position.en_passant_square(), None);
    play(&mut position, &["c7c5"]);
    assert_eq!(position.en_passant_square(), Some(sq("c6")));
    play(&mut position, &["g1f3"]);
    assert_eq!(position.en_passant_square(), None);
}

#[test]
fn test_en_passant_exposing_king_is_illegal() {
    // Taking c6 would clear both pawns off the fifth rank.
    let mut position = Position::from_fen("8/8/8/KPp4r/8/8/8/4k3 w - c6 0 1").unwrap();
    assert!(position
        .generate_pseudo_legal_moves()
        .iter()
        .any(|m| m.is_en_passant()));
    assert!(!position
        .generate_legal_moves()
        .iter()
        .any(|m| m.is_en_passant()));
}

#[test]
fn test_castling_blocked_by_check() {
    let mut position = Position::from_fen("r3k2r/8/8/8/4Q3/8/8/R3K2R b KQkq - 0 1").unwrap();
    assert!(
        !position.generate_legal_moves().iter().any(|m| m.is_castle()),
        "Castling should not be available when in check"
    );
}

#[test]
fn test_castling_through_attacked_square() {
    // f1 is covered, so only the queen side remains.
    let mut position = Position::from_fen("4k3/8/8/8/8/8/5r2/R3K2R w KQ - 0 1").unwrap();
    let castles: Vec<_> = position
        .generate_legal_moves()
        .into_iter()
        .filter(|m| m.is_castle())
        .collect();
    assert_eq!(castles.len(), 1);
    assert_eq!(castles[0].kind, MoveKind::Castle(CastleSide::QueenSide));
}

#[test]
fn test_castling_allowed_with_attacked_rook_or_b_file() {
    // b1 is attacked but the king never crosses it.
    let mut position = Position::from_fen("4k3/8/8/8/8/8/1r6/R3K2R w KQ - 0 1").unwrap();
    let castles = position
        .generate_legal_moves()
        .iter()
        .filter(|m| m.is_castle())
        .count();
    assert_eq!(castles, 2);

    // h1 rook attacked from h2.
    let mut position = Position::from_fen("4k3/8/8/8/8/8/7r/R3K2R w KQ - 0 1").unwrap();
    assert!(position
        .generate_legal_moves()
        .iter()
        .any(|m| m.kind == MoveKind::Castle(CastleSide::KingSide)));
}

#[test]
fn test_castling_needs_empty_squares_and_rook() {
    let mut position = Position::new();
    assert!(!position.generate_legal_moves().iter().any(|m| m.is_castle()));

    // Right still set but the rook is gone.
    let mut position = Position::from_fen("4k3/8/8/8/8/8/8/4K2R w KQ - 0 1").unwrap();
    let castles: Vec<_> = position
        .generate_legal_moves()
        .into_iter()
        .filter(|m| m.is_castle())
        .collect();
    assert_eq!(castles.len(), 1);
    assert_eq!(castles[0].to, sq("g1"));

    // Knight on b1 blocks the long castle.
    let mut position = Position::from_fen("4k3/8/8/8/8/8/8/RN2K3 w Q - 0 1").unwrap();
    assert!(!position.generate_legal_moves().iter().any(|m| m.is_castle()));
}

#[test]
fn test_castling_rights_lost_when_king_or_rook_moves() {
    let mut position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    play(&mut position, &["h1h2", "a8a7", "h2h1", "a7a8"]);
    let rights = position.castling_rights();
    assert!(!rights.has(Color::White, CastleSide::KingSide));
    assert!(rights.has(Color::White, CastleSide::QueenSide));
    assert!(rights.has(Color::Black, CastleSide::KingSide));
    assert!(!rights.has(Color::Black, CastleSide::QueenSide));

    // Rook back home does not bring the right back.
    assert!(!position
        .generate_legal_moves()
        .iter()
        .any(|m| m.kind == MoveKind::Castle(CastleSide::KingSide)));

    play(&mut position, &["e1d1"]);
    assert!(position.castling_rights().has(Color::Black, CastleSide::KingSide));
    assert!(!position.castling_rights().has(Color::White, CastleSide::QueenSide));
}

#[test]
fn test_castling_rights_lost_when_rook_captured() {
    let mut position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    play(&mut position, &["a1a8"]);
    assert_eq!(position.to_fen(), "R3k2r/8/8/8/8/8/8/4K2R b Kk - 0 1");
}

#[test]
fn test_promotion_capture_on_rook_home_revokes_right() {
    let mut position = Position::from_fen("r3k3/1P6/8/8/8/8/8/4K3 w q - 0 1").unwrap();
    let mv = find_move(&mut position, "b7", "a8", Some(PieceType::Queen));
    let undo = position.make_move(mv);
    assert!(position.castling_rights().is_empty());
    position.unmake_move(mv, undo);
    assert!(position.castling_rights().has(Color::Black, CastleSide::QueenSide));
}

#[test]
fn test_unmade_right_is_not_regenerated_on_new_line() {
    let mut position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let mv = find_move(&mut position, "h1", "h2", None);
    let undo = position.make_move(mv);
    assert!(!position.castling_rights().has(Color::White, CastleSide::KingSide));
    position.unmake_move(mv, undo);
    assert!(position.castling_rights().has(Color::White, CastleSide::KingSide));
    assert!(position
        .generate_legal_moves()
        .iter()
        .any(|m| m.kind == MoveKind::Castle(CastleSide::KingSide)));

    // Different continuation: pieces return home, rights stay gone.
    play(&mut position, &["h1g1", "e8d8", "g1h1", "d8e8"]);
    assert_eq!(position.to_fen(), "r3k2r/8/8/8/8/8/8/R3K2R w Q - 4 3");
    let castles: Vec<MoveKind> = position
        .generate_legal_moves()
        .iter()
        .filter(|m| m.is_castle())
        .map(|m| m.kind)
        .collect();
    assert_eq!(castles, vec![MoveKind::Castle(CastleSide::QueenSide)]);
}

#[test]
fn test_double_check_only_king_can_move() {
    let mut position = Position::from_fen("4r1k1/8/8/8/8/R2n4/8/4K3 w - - 0 1").unwrap();
    assert!(position.is_in_check());
    let moves = position.generate_legal_moves();
    assert!(!moves.is_empty());
    for mv in &moves {
        assert_eq!(mv.from, sq("e1"), "Only king should be able to move in double check");
    }
}

#[test]
fn test_pinned_piece_cannot_move() {
    let mut position = Position::from_fen("4k3/4r3/8/8/8/8/4B3/4K3 w - - 0 1").unwrap();
    assert!(legal_from(&mut position, "e2").is_empty());
    assert!(!position.generate_pseudo_legal_moves().is_empty());
}

#[test]
fn test_kings_never_touch() {
    let mut position = Position::from_fen("8/8/8/3k4/8/3K4/8/8 w - - 0 1").unwrap();
    assert_eq!(
        legal_from(&mut position, "d3"),
        vec!["d3c2", "d3c3", "d3d2", "d3e2", "d3e3"]
    );
}

#[test]
fn test_checkmate_back_rank() {
    let mut position = Position::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
    let mv = find_move(&mut position, "a1", "a8", None);
    let _undo = position.make_move(mv);
    assert!(position.is_checkmate());
}

#[test]
fn test_moves_do_not_wrap_around_board_edge() {
    let mut position = Position::from_fen("4k3/8/8/8/7N/8/8/4K3 w - - 0 1").unwrap();
    assert_eq!(
        legal_from(&mut position, "h4"),
        vec!["h4f3", "h4f5", "h4g2", "h4g6"]
    );

    // a2 + 7 is h2 in flat arithmetic.
    let mut position = Position::from_fen("4k3/8/8/8/8/8/P6p/4K3 w - - 0 1").unwrap();
    assert_eq!(legal_from(&mut position, "a2"), vec!["a2a3", "a2a4"]);

    // h2 + 9 is a4 in flat arithmetic.
    let mut position = Position::from_fen("4k3/8/8/8/p7/8/7P/4K3 w - - 0 1").unwrap();
    assert_eq!(legal_from(&mut position, "h2"), vec!["h2h3", "h2h4"]);

    let mut position = Position::from_fen("4k3/8/8/8/7R/8/8/4K3 w - - 0 1").unwrap();
    let rook_moves = legal_from(&mut position, "h4");
    assert_eq!(rook_moves.len(), 14);
    assert!(!rook_moves.contains(&"h4a5".to_string()));
}

#[test]
fn test_king_cache_follows_king() {
    let mut position = Position::new();
    play(&mut position, &["e2e4", "e7e5", "e1e2", "e8e7"]);
    assert_eq!(position.king_square(Color::White), sq("e2"));
    assert_eq!(position.king_square(Color::Black), sq("e7"));
    assert!(!position.castling_rights().has(Color::White, CastleSide::KingSide));
}
