use super::{CastleSide, Color, Move, MoveKind, Piece, PieceType, Position, UndoInfo};

impl Position {
    /// Apply `mv` to the position and return the record that takes it back.
    ///
    /// `mv` must come from the move generator for this exact position. Handing
    /// in a move from another position is a caller bug and panics if the
    /// origin square is empty.
    pub fn make_move(&mut self, mv: Move) -> UndoInfo {
        let color = self.side_to_move;
        let mut undo = UndoInfo {
            captured: None,
            previous_castling_rights: self.castling_rights,
            previous_en_passant: self.en_passant,
            previous_halfmove_clock: self.halfmove_clock,
            previous_fullmove_number: self.fullmove_number,
            rook_squares: None,
            captured_square: None,
        };

        let moving = self
            .board
            .take(mv.from)
            .expect("make_move: origin square is empty");

        match mv.kind {
            MoveKind::Normal { .. } | MoveKind::DoublePush => {
                undo.captured = self.board.take(mv.to);
                self.board.set(mv.to, Some(moving));
            }
            MoveKind::Castle(side) => {
                let rook_from = side.rook_from(color);
                let rook_to = side.rook_to(color);
                let rook = self.board.take(rook_from);
                self.board.set(rook_to, rook);
                self.board.set(mv.to, Some(moving));
                undo.rook_squares = Some((rook_from, rook_to));
            }
            MoveKind::EnPassant => {
                // The victim sits behind the landing square, not on it.
                let victim = mv
                    .to
                    .offset(-color.pawn_push())
                    .expect("make_move: en passant target on the edge rank");
                undo.captured = self.board.take(victim);
                undo.captured_square = Some(victim);
                self.board.set(mv.to, Some(moving));
            }
            MoveKind::Promotion { piece, .. } => {
                undo.captured = self.board.take(mv.to);
                self.board.set(mv.to, Some(Piece::new(piece, color)));
            }
        }

        if moving.kind == PieceType::King {
            self.king_squares[color.index()] = mv.to;
        }
        self.revoke_castling_rights(mv, moving);

        self.en_passant = match mv.kind {
            MoveKind::DoublePush => mv.from.offset(color.pawn_push()),
            _ => None,
        };

        if moving.kind == PieceType::Pawn || undo.captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = color.opponent();

        undo
    }

    /// Take back `mv`, which must be the move `undo` was produced for and the
    /// most recent move made on this position.
    pub fn unmake_move(&mut self, mv: Move, undo: UndoInfo) {
        let color = self.side_to_move.opponent();
        self.side_to_move = color;

        let moved = self
            .board
            .take(mv.to)
            .expect("unmake_move: destination square is empty");
        // Only a pawn can have promoted.
        let restored = match mv.kind {
            MoveKind::Promotion { .. } => Piece::new(PieceType::Pawn, color),
            _ => moved,
        };
        self.board.set(mv.from, Some(restored));

        match mv.kind {
            MoveKind::Castle(_) => {
                let (rook_from, rook_to) = undo
                    .rook_squares
                    .expect("unmake_move: castle record without rook squares");
                let rook = self.board.take(rook_to);
                self.board.set(rook_from, rook);
            }
            MoveKind::EnPassant => {
                let victim = undo
                    .captured_square
                    .expect("unmake_move: en passant record without victim square");
                self.board.set(victim, undo.captured);
            }
            MoveKind::Normal { .. } | MoveKind::DoublePush | MoveKind::Promotion { .. } => {
                self.board.set(mv.to, undo.captured);
            }
        }

        if restored.kind == PieceType::King {
            self.king_squares[color.index()] = mv.from;
        }

        self.castling_rights = undo.previous_castling_rights;
        self.en_passant = undo.previous_en_passant;
        self.halfmove_clock = undo.previous_halfmove_clock;
        self.fullmove_number = undo.previous_fullmove_number;
    }

    /// Rights only ever shrink here: a king leaving home drops both of its
    /// color's rights, a rook leaving its home corner drops that side, and
    /// any move landing on an enemy home corner drops the enemy's right there.
    fn revoke_castling_rights(&mut self, mv: Move, moving: Piece) {
        let color = moving.color;
        let opponent = color.opponent();

        if moving.kind == PieceType::King {
            self.castling_rights.remove_color(color);
        }
        for side in CastleSide::BOTH {
            if moving.kind == PieceType::Rook && mv.from == side.rook_from(color) {
                self.castling_rights.remove(color, side);
            }
            if mv.to == side.rook_from(opponent) {
                self.castling_rights.remove(opponent, side);
            }
        }
    }
}
