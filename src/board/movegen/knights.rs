use super::super::attacks::{KNIGHT_OFFSETS, KNIGHT_REACH};
use super::super::{Move, Position, Square};

impl Position {
    pub(crate) fn generate_knight_moves(&self, from: Square, moves: &mut Vec<Move>) {
        self.generate_leaper_moves(from, &KNIGHT_OFFSETS, KNIGHT_REACH, moves);
    }

    /// Single-step moves for knights and kings: any in-reach target not
    /// holding an allied piece.
    pub(crate) fn generate_leaper_moves(
        &self,
        from: Square,
        offsets: &[i8],
        reach: u8,
        moves: &mut Vec<Move>,
    ) {
        let color = self.side_to_move;
        for &offset in offsets {
            let Some(to) = from.step(offset, reach) else {
                continue;
            };
            match self.board.get(to) {
                None => moves.push(Move::quiet(from, to)),
                Some(target) if target.color != color => moves.push(Move::capture(from, to)),
                Some(_) => {}
            }
        }
    }
}
