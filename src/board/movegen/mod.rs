//! Pseudo-legal move generation, the legal-move filter and perft.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attacks::{BISHOP_OFFSETS, QUEEN_OFFSETS, ROOK_OFFSETS};
use super::{Move, PieceType, Position, Square};

impl Position {
    /// Moves that follow each piece's movement rules for the side to move,
    /// without checking whether the mover's king is left attacked.
    #[must_use]
    pub fn generate_pseudo_legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        let color = self.side_to_move;
        for (from, piece) in self.board.pieces() {
            if piece.color != color {
                continue;
            }
            match piece.kind {
                PieceType::Pawn => self.generate_pawn_moves(from, &mut moves),
                PieceType::Knight => self.generate_knight_moves(from, &mut moves),
                PieceType::Bishop => self.generate_sliding_moves(from, &BISHOP_OFFSETS, &mut moves),
                PieceType::Rook => self.generate_sliding_moves(from, &ROOK_OFFSETS, &mut moves),
                PieceType::Queen => self.generate_sliding_moves(from, &QUEEN_OFFSETS, &mut moves),
                PieceType::King => self.generate_king_moves(from, &mut moves),
            }
        }
        moves
    }

    /// Pseudo-legal moves that do not leave the mover's own king attacked.
    ///
    /// Each candidate is made, tested and unmade against the same starting
    /// position, so `self` is unchanged on return.
    pub fn generate_legal_moves(&mut self) -> Vec<Move> {
        let mover = self.side_to_move;
        let pseudo_moves = self.generate_pseudo_legal_moves();
        let mut legal_moves = Vec::with_capacity(pseudo_moves.len());

        for mv in pseudo_moves {
            let undo = self.make_move(mv);
            // side_to_move has flipped; test the king of the side that moved.
            let safe = !self.is_king_attacked(mover);
            self.unmake_move(mv, undo);
            if safe {
                legal_moves.push(mv);
            }
        }
        legal_moves
    }

    /// Legal moves starting on `from`.
    pub fn legal_moves_from(&mut self, from: Square) -> Vec<Move> {
        self.generate_legal_moves()
            .into_iter()
            .filter(|mv| mv.from == from)
            .collect()
    }

    pub fn is_checkmate(&mut self) -> bool {
        self.is_in_check() && self.generate_legal_moves().is_empty()
    }

    pub fn is_stalemate(&mut self) -> bool {
        !self.is_in_check() && self.generate_legal_moves().is_empty()
    }

    /// Number of leaf nodes of the legal move tree `depth` plies deep.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            let undo = self.make_move(mv);
            nodes += self.perft(depth - 1);
            self.unmake_move(mv, undo);
        }
        nodes
    }

    /// Perft split by root move, for comparing against a reference engine.
    pub fn perft_divide(&mut self, depth: usize) -> Vec<(Move, u64)> {
        if depth == 0 {
            return Vec::new();
        }

        let moves = self.generate_legal_moves();
        let mut divided = Vec::with_capacity(moves.len());
        for mv in moves {
            let undo = self.make_move(mv);
            let nodes = self.perft(depth - 1);
            self.unmake_move(mv, undo);
            log::trace!("perft divide {mv}: {nodes}");
            divided.push((mv, nodes));
        }
        divided
    }
}
