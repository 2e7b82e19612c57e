//! Move types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastleSide;
use super::piece::PieceType;
use super::square::Square;

/// How a move changes the board, one case per make/unmake path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    /// Any piece moving to an empty or enemy-occupied square.
    Normal { capture: bool },
    /// Pawn advancing two squares from its start rank.
    DoublePush,
    /// King moving two squares, rook jumping over it.
    Castle(CastleSide),
    /// Pawn capturing the pawn that just double-pushed past it.
    EnPassant,
    /// Pawn reaching the last rank and becoming `piece`.
    Promotion { piece: PieceType, capture: bool },
}

/// Flag view of a move.
///
/// Several flags can be set at once (a capturing promotion carries both
/// `CAPTURE` and `PROMOTION`), unlike [`MoveKind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct MoveFlags(u8);

impl MoveFlags {
    pub const CAPTURE: MoveFlags = MoveFlags(1 << 0);
    pub const EN_PASSANT: MoveFlags = MoveFlags(1 << 1);
    pub const CASTLE: MoveFlags = MoveFlags(1 << 2);
    pub const PROMOTION: MoveFlags = MoveFlags(1 << 3);
    pub const DOUBLE_PUSH: MoveFlags = MoveFlags(1 << 4);

    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        MoveFlags(0)
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, other: MoveFlags) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: MoveFlags) -> Self {
        MoveFlags(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl std::ops::BitOr for MoveFlags {
    type Output = MoveFlags;

    fn bitor(self, rhs: MoveFlags) -> MoveFlags {
        self.union(rhs)
    }
}

/// A move from one square to another.
///
/// Moves are produced by the generator for a specific position; making a move
/// built by hand for a different position is an invariant violation.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square, kind: MoveKind) -> Self {
        Move { from, to, kind }
    }

    /// Non-capturing move of any piece
    #[inline]
    #[must_use]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Move::new(from, to, MoveKind::Normal { capture: false })
    }

    /// Capture of the piece standing on `to`
    #[inline]
    #[must_use]
    pub const fn capture(from: Square, to: Square) -> Self {
        Move::new(from, to, MoveKind::Normal { capture: true })
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        matches!(
            self.kind,
            MoveKind::Normal { capture: true }
                | MoveKind::EnPassant
                | MoveKind::Promotion { capture: true, .. }
        )
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.kind, MoveKind::EnPassant)
    }

    #[inline]
    #[must_use]
    pub const fn is_castle(self) -> bool {
        matches!(self.kind, MoveKind::Castle(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        matches!(self.kind, MoveKind::Promotion { .. })
    }

    #[inline]
    #[must_use]
    pub const fn is_double_push(self) -> bool {
        matches!(self.kind, MoveKind::DoublePush)
    }

    /// The promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<PieceType> {
        match self.kind {
            MoveKind::Promotion { piece, .. } => Some(piece),
            _ => None,
        }
    }

    #[must_use]
    pub fn flags(self) -> MoveFlags {
        match self.kind {
            MoveKind::Normal { capture: false } => MoveFlags::empty(),
            MoveKind::Normal { capture: true } => MoveFlags::CAPTURE,
            MoveKind::DoublePush => MoveFlags::DOUBLE_PUSH,
            MoveKind::Castle(_) => MoveFlags::CASTLE,
            MoveKind::EnPassant => MoveFlags::EN_PASSANT | MoveFlags::CAPTURE,
            MoveKind::Promotion { capture, .. } => {
                if capture {
                    MoveFlags::PROMOTION | MoveFlags::CAPTURE
                } else {
                    MoveFlags::PROMOTION
                }
            }
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion() {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        if self.is_capture() {
            write!(f, " cap")?;
        }
        if self.is_castle() {
            write!(f, " castle")?;
        }
        if self.is_en_passant() {
            write!(f, " ep")?;
        }
        if self.is_double_push() {
            write!(f, " dbl")?;
        }
        write!(f, ")")
    }
}

/// Coordinate notation: `e2e4`, `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion() {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}
