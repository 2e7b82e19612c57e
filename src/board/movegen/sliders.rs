use super::super::attacks::STEP_REACH;
use super::super::{Move, Position, Square};

impl Position {
    /// Ray-cast along each direction until the edge, an ally (no move), or an
    /// enemy (capture, then stop).
    pub(crate) fn generate_sliding_moves(
        &self,
        from: Square,
        directions: &[i8],
        moves: &mut Vec<Move>,
    ) {
        let color = self.side_to_move;
        for &direction in directions {
            let mut current = from;
            while let Some(to) = current.step(direction, STEP_REACH) {
                match self.board.get(to) {
                    None => moves.push(Move::quiet(from, to)),
                    Some(target) => {
                        if target.color != color {
                            moves.push(Move::capture(from, to));
                        }
                        break;
                    }
                }
                current = to;
            }
        }
    }
}
