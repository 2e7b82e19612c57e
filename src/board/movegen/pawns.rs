use super::super::attacks::STEP_REACH;
use super::super::{Move, MoveKind, PieceType, Position, Square, PROMOTION_PIECES};

impl Position {
    pub(crate) fn generate_pawn_moves(&self, from: Square, moves: &mut Vec<Move>) {
        let color = self.side_to_move;
        let push = color.pawn_push();

        if let Some(one) = from.offset(push) {
            if self.board.is_empty(one) {
                self.push_pawn_move(from, one, false, moves);

                if from.rank() == color.pawn_start_rank() {
                    if let Some(two) = one.offset(push) {
                        if self.board.is_empty(two) {
                            moves.push(Move::new(from, two, MoveKind::DoublePush));
                        }
                    }
                }
            }
        }

        for capture in color.pawn_captures() {
            let Some(to) = from.step(capture, STEP_REACH) else {
                continue;
            };
            if self.board.is_enemy_of(to, color) {
                self.push_pawn_move(from, to, true, moves);
            } else if Some(to) == self.en_passant && self.en_passant_victim_present(to) {
                moves.push(Move::new(from, to, MoveKind::EnPassant));
            }
        }
    }

    /// A move landing on the last rank fans out into one move per promotion piece.
    fn push_pawn_move(&self, from: Square, to: Square, capture: bool, moves: &mut Vec<Move>) {
        if to.rank() == self.side_to_move.promotion_rank() {
            for piece in PROMOTION_PIECES {
                moves.push(Move::new(from, to, MoveKind::Promotion { piece, capture }));
            }
        } else {
            moves.push(Move::new(from, to, MoveKind::Normal { capture }));
        }
    }

    /// The en-passant target is empty and the enemy pawn that double-pushed
    /// stands right behind it.
    fn en_passant_victim_present(&self, target: Square) -> bool {
        let color = self.side_to_move;
        self.board.is_empty(target)
            && target
                .offset(-color.pawn_push())
                .and_then(|sq| self.board.get(sq))
                .is_some_and(|p| p.is(PieceType::Pawn, color.opponent()))
    }
}
