use super::error::FenError;
use super::{Board, CastleSide, CastlingRights, Color, Piece, PieceType, Square};

/// FEN of the standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Everything needed to take back one move.
///
/// Produced by [`Position::make_move`] and consumed by exactly one matching
/// [`Position::unmake_move`] with the same move, in strict LIFO order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use = "an UndoInfo is the only way to unmake the move"]
pub struct UndoInfo {
    pub(crate) captured: Option<Piece>,
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_en_passant: Option<Square>,
    pub(crate) previous_halfmove_clock: u32,
    pub(crate) previous_fullmove_number: u32,
    // Castle only: (rook from, rook to)
    pub(crate) rook_squares: Option<(Square, Square)>,
    // EnPassant only: where the captured pawn stood
    pub(crate) captured_square: Option<Square>,
}

impl UndoInfo {
    /// The piece removed by the move, if any.
    #[must_use]
    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }

    #[must_use]
    pub fn previous_castling_rights(&self) -> CastlingRights {
        self.previous_castling_rights
    }

    #[must_use]
    pub fn previous_en_passant(&self) -> Option<Square> {
        self.previous_en_passant
    }
}

/// A chess position: board, side to move, castling rights, en-passant target,
/// clocks, and a cached king square per color.
///
/// `king_squares` is a derived index into `board`. It is rebuilt by a full
/// board scan only when a position is constructed (start position, FEN,
/// builder) and afterwards is kept in step by the make/unmake paths that move
/// a king. Nothing else may touch it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) king_squares: [Square; 2],
}

impl Position {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Position {
            board: Board::starting(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::all(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            king_squares: [
                CastleSide::king_from(Color::White),
                CastleSide::king_from(Color::Black),
            ],
        }
    }

    /// Assemble a position from its parts, locating each king by board scan.
    ///
    /// Fails unless each color has exactly one king.
    pub(crate) fn from_parts(
        board: Board,
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant: Option<Square>,
        halfmove_clock: u32,
        fullmove_number: u32,
    ) -> Result<Self, FenError> {
        let mut king_squares = [Square::A1; 2];
        for color in Color::BOTH {
            let mut kings = board
                .pieces()
                .filter(|(_, p)| p.is(PieceType::King, color))
                .map(|(sq, _)| sq);
            match (kings.next(), kings.count()) {
                (Some(sq), 0) => king_squares[color.index()] = sq,
                (first, rest) => {
                    return Err(FenError::KingCount {
                        color,
                        found: usize::from(first.is_some()) + rest,
                    })
                }
            }
        }

        Ok(Position {
            board,
            side_to_move,
            castling_rights,
            en_passant,
            halfmove_clock,
            fullmove_number,
            king_squares,
        })
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.get(sq)
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// Square a pawn would land on to capture en passant, if any.
    #[must_use]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Square of `color`'s king, read from the cache.
    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}
