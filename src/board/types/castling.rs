//! Castling rights and castling geometry.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

const CASTLE_WHITE_K: u8 = 1 << 0;
const CASTLE_WHITE_Q: u8 = 1 << 1;
const CASTLE_BLACK_K: u8 = 1 << 2;
const CASTLE_BLACK_Q: u8 = 1 << 3;

const ALL_CASTLING_RIGHTS: u8 = CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Which rook the king castles with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Home square of the king (e1 / e8).
    #[inline]
    #[must_use]
    pub const fn king_from(color: Color) -> Square {
        Square::at(4, color.back_rank())
    }

    /// Landing square of the king, two files towards the rook.
    #[inline]
    #[must_use]
    pub const fn king_to(self, color: Color) -> Square {
        match self {
            CastleSide::KingSide => Square::at(6, color.back_rank()),
            CastleSide::QueenSide => Square::at(2, color.back_rank()),
        }
    }

    /// Home square of the castling rook.
    #[inline]
    #[must_use]
    pub const fn rook_from(self, color: Color) -> Square {
        match self {
            CastleSide::KingSide => Square::at(7, color.back_rank()),
            CastleSide::QueenSide => Square::at(0, color.back_rank()),
        }
    }

    /// Square the rook lands on, the one the king passes over.
    #[inline]
    #[must_use]
    pub const fn rook_to(self, color: Color) -> Square {
        match self {
            CastleSide::KingSide => Square::at(5, color.back_rank()),
            CastleSide::QueenSide => Square::at(3, color.back_rank()),
        }
    }

    /// Squares strictly between king and rook; all must be empty.
    pub(crate) fn between(self, color: Color) -> impl Iterator<Item = Square> {
        let files = match self {
            CastleSide::KingSide => 5..7,
            CastleSide::QueenSide => 1..4,
        };
        let rank = color.back_rank();
        files.map(move |file| Square::at(file, rank))
    }

    /// Squares the king passes through or lands on; none may be attacked.
    pub(crate) const fn king_path(self, color: Color) -> [Square; 2] {
        [self.rook_to(color), self.king_to(color)]
    }
}

/// The four castling flags (white/black x king-side/queen-side) as a bitmask.
///
/// During play flags are only ever removed; [`CastlingRights::insert`] exists
/// for building positions, never for making moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::bit_for(color, side) != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn insert(&mut self, color: Color, side: CastleSide) {
        self.0 |= Self::bit_for(color, side);
    }

    #[inline]
    pub fn remove(&mut self, color: Color, side: CastleSide) {
        self.0 &= !Self::bit_for(color, side);
    }

    /// Clear both rights of one color.
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.remove(color, CastleSide::KingSide);
        self.remove(color, CastleSide::QueenSide);
    }

    /// True when every right set in `self` is also set in `other`.
    #[inline]
    #[must_use]
    pub const fn is_subset_of(self, other: CastlingRights) -> bool {
        self.0 & !other.0 == 0
    }

    /// Raw bitmask (bit 0 = K, 1 = Q, 2 = k, 3 = q)
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    #[inline]
    const fn bit_for(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => CASTLE_WHITE_K,
            (Color::White, CastleSide::QueenSide) => CASTLE_WHITE_Q,
            (Color::Black, CastleSide::KingSide) => CASTLE_BLACK_K,
            (Color::Black, CastleSide::QueenSide) => CASTLE_BLACK_Q,
        }
    }
}
