use super::super::attacks::{KING_OFFSETS, STEP_REACH};
use super::super::{CastleSide, Move, MoveKind, PieceType, Position, Square};

impl Position {
    pub(crate) fn generate_king_moves(&self, from: Square, moves: &mut Vec<Move>) {
        self.generate_leaper_moves(from, &KING_OFFSETS, STEP_REACH, moves);
        self.generate_castling_moves(from, moves);
    }

    /// Castling is generated only when the right is held, the king is on its
    /// home square and not in check, the rook is home, every square between
    /// them is empty, and no square the king crosses or lands on is attacked.
    /// The rook's own square may be attacked.
    fn generate_castling_moves(&self, from: Square, moves: &mut Vec<Move>) {
        let color = self.side_to_move;
        let opponent = color.opponent();
        if from != CastleSide::king_from(color) {
            return;
        }
        if self.is_square_attacked(from, opponent) {
            return;
        }

        for side in CastleSide::BOTH {
            if !self.castling_rights.has(color, side) {
                continue;
            }
            let rook_home = self.board.get(side.rook_from(color));
            if !rook_home.is_some_and(|p| p.is(PieceType::Rook, color)) {
                continue;
            }
            if !side.between(color).all(|sq| self.board.is_empty(sq)) {
                continue;
            }
            if side
                .king_path(color)
                .iter()
                .any(|&sq| self.is_square_attacked(sq, opponent))
            {
                continue;
            }
            moves.push(Move::new(from, side.king_to(color), MoveKind::Castle(side)));
        }
    }
}
