//! Zobrist hashing for chess positions.
//!
//! The hash covers piece placement, side to move, castling rights and the
//! en-passant file. Clocks are left out, so two positions that differ only in
//! their clocks hash alike; that is what repetition detection needs.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{CastleSide, Color, Position};

struct ZobristKeys {
    // piece_keys[piece_type][color][square_index]
    piece_keys: [[[u64; 64]; 2]; 6],
    black_to_move_key: u64,
    // castling_keys[color][side]: 0 = kingside, 1 = queenside
    castling_keys: [[u64; 2]; 2],
    // only the file of the en-passant target matters
    en_passant_keys: [u64; 8],
}

/// Keys are drawn from a fixed seed so hashes are stable across runs.
const ZOBRIST_SEED: u64 = 1234567890;

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);
        let mut keys = ZobristKeys {
            piece_keys: [[[0; 64]; 2]; 6],
            black_to_move_key: 0,
            castling_keys: [[0; 2]; 2],
            en_passant_keys: [0; 8],
        };

        keys.piece_keys
            .iter_mut()
            .flatten()
            .flatten()
            .for_each(|key| *key = rng.gen());
        keys.black_to_move_key = rng.gen();
        keys.castling_keys
            .iter_mut()
            .flatten()
            .for_each(|key| *key = rng.gen());
        keys.en_passant_keys
            .iter_mut()
            .for_each(|key| *key = rng.gen());
        keys
    }
}

static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

impl Position {
    /// 64-bit Zobrist hash of board, side to move, castling rights and
    /// en-passant target, computed from scratch.
    #[must_use]
    pub fn zobrist_hash(&self) -> u64 {
        let keys = &*ZOBRIST;
        let mut hash = 0;

        for (sq, piece) in self.board.pieces() {
            hash ^= keys.piece_keys[piece.kind.index()][piece.color.index()][sq.index()];
        }

        if self.side_to_move == Color::Black {
            hash ^= keys.black_to_move_key;
        }

        for color in Color::BOTH {
            for (side_idx, side) in CastleSide::BOTH.into_iter().enumerate() {
                if self.castling_rights.has(color, side) {
                    hash ^= keys.castling_keys[color.index()][side_idx];
                }
            }
        }

        if let Some(ep) = self.en_passant {
            hash ^= keys.en_passant_keys[ep.file() as usize];
        }

        hash
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Position;

    #[test]
    fn test_hash_is_deterministic() {
        assert_eq!(Position::new().zobrist_hash(), Position::new().zobrist_hash());
    }

    #[test]
    fn test_hash_ignores_clocks() {
        let a = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w Q - 0 1").unwrap();
        let b = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w Q - 37 60").unwrap();
        assert_eq!(a.zobrist_hash(), b.zobrist_hash());
    }

    #[test]
    fn test_hash_sees_side_rights_and_en_passant() {
        let base = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w Q - 0 1").unwrap();
        let black = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 b Q - 0 1").unwrap();
        let no_rights = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
        assert_ne!(base.zobrist_hash(), black.zobrist_hash());
        assert_ne!(base.zobrist_hash(), no_rights.zobrist_hash());

        let with_ep =
            Position::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
                .unwrap();
        let without_ep =
            Position::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1")
                .unwrap();
        assert_ne!(with_ep.zobrist_hash(), without_ep.zobrist_hash());
    }

    #[test]
    fn test_transposition_hashes_alike() {
        let mut a = Position::new();
        for mv in ["g1f3", "g8f6", "b1c3"] {
            let _ = a.play_uci(mv).unwrap();
        }
        let mut b = Position::new();
        for mv in ["b1c3", "g8f6", "g1f3"] {
            let _ = b.play_uci(mv).unwrap();
        }
        assert_eq!(a.zobrist_hash(), b.zobrist_hash());
    }
}
