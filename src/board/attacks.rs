//! Square attack detection and the direction-offset tables it shares with
//! move generation.
//!
//! Offsets are flat-index deltas on the a1 = 0 layout. Every step goes through
//! [`Square::step`], which rejects steps that wrap across the a/h edge.

use super::{Color, PieceType, Position, Square};

pub(crate) const KNIGHT_OFFSETS: [i8; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];
pub(crate) const KING_OFFSETS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];
pub(crate) const BISHOP_OFFSETS: [i8; 4] = [-9, -7, 7, 9];
pub(crate) const ROOK_OFFSETS: [i8; 4] = [-8, -1, 1, 8];
pub(crate) const QUEEN_OFFSETS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

/// Largest file/rank change of one knight jump.
pub(crate) const KNIGHT_REACH: u8 = 2;
/// Largest file/rank change of one king step or one slider step.
pub(crate) const STEP_REACH: u8 = 1;

impl Position {
    /// True if any piece of `by` attacks `square`.
    ///
    /// This is attack, not legality: a pinned piece still attacks, and the
    /// occupant of `square` (of either color) does not block.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        self.attacked_by_pawn(square, by)
            || self.attacked_by_leaper(square, by, PieceType::Knight, &KNIGHT_OFFSETS, KNIGHT_REACH)
            || self.attacked_by_leaper(square, by, PieceType::King, &KING_OFFSETS, STEP_REACH)
            || self.attacked_along_rays(square, by, &BISHOP_OFFSETS, PieceType::Bishop)
            || self.attacked_along_rays(square, by, &ROOK_OFFSETS, PieceType::Rook)
    }

    /// True if `color`'s king is attacked by the other side.
    #[must_use]
    pub fn is_king_attacked(&self, color: Color) -> bool {
        self.is_square_attacked(self.king_square(color), color.opponent())
    }

    /// True if the side to move is in check.
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.is_king_attacked(self.side_to_move)
    }

    fn attacked_by_pawn(&self, square: Square, by: Color) -> bool {
        // An attacking pawn stands one capture step behind the target.
        by.pawn_captures().iter().any(|&capture| {
            square
                .step(-capture, STEP_REACH)
                .and_then(|from| self.board.get(from))
                .is_some_and(|p| p.is(PieceType::Pawn, by))
        })
    }

    fn attacked_by_leaper(
        &self,
        square: Square,
        by: Color,
        kind: PieceType,
        offsets: &[i8],
        reach: u8,
    ) -> bool {
        offsets.iter().any(|&offset| {
            square
                .step(offset, reach)
                .and_then(|from| self.board.get(from))
                .is_some_and(|p| p.is(kind, by))
        })
    }

    /// Ray cast from `square`; the first piece met attacks it if it is
    /// `by`'s `slider` or queen.
    fn attacked_along_rays(
        &self,
        square: Square,
        by: Color,
        offsets: &[i8],
        slider: PieceType,
    ) -> bool {
        offsets.iter().any(|&offset| {
            let mut current = square;
            while let Some(next) = current.step(offset, STEP_REACH) {
                if let Some(piece) = self.board.get(next) {
                    return piece.color == by
                        && (piece.kind == slider || piece.kind == PieceType::Queen);
                }
                current = next;
            }
            false
        })
    }
}
