//! Fluent builder for constructing positions piece by piece instead of from FEN.
//!
//! # Example
//! ```
//! use chess_rules::{Color, Piece, PieceType, PositionBuilder, Square};
//!
//! let position = PositionBuilder::new()
//!     .piece(Square::E1, Piece::new(PieceType::King, Color::White))
//!     .piece(Square::E8, Piece::new(PieceType::King, Color::Black))
//!     .piece("a2".parse().unwrap(), Piece::new(PieceType::Pawn, Color::White))
//!     .side_to_move(Color::Black)
//!     .build()
//!     .unwrap();
//! assert_eq!(position.to_fen(), "4k3/8/8/8/8/8/P7/4K3 b - - 0 1");
//! ```

use super::error::FenError;
use super::{Board, CastleSide, CastlingRights, Color, Piece, Position, Square};

/// A fluent builder for [`Position`]s.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    board: Board,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// An empty board, White to move, no rights, clocks at 0 and 1.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            board: Board::empty(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        PositionBuilder {
            board: Board::starting(),
            castling_rights: CastlingRights::all(),
            ..Self::new()
        }
    }

    /// Place a piece, replacing whatever stood on `square`.
    #[must_use]
    pub fn piece(mut self, square: Square, piece: Piece) -> Self {
        self.board.set(square, Some(piece));
        self
    }

    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.set(square, None);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Enable one castling right.
    #[must_use]
    pub fn castle(mut self, color: Color, side: CastleSide) -> Self {
        self.castling_rights.insert(color, side);
        self
    }

    #[must_use]
    pub fn castle_kingside(self, color: Color) -> Self {
        self.castle(color, CastleSide::KingSide)
    }

    #[must_use]
    pub fn castle_queenside(self, color: Color) -> Self {
        self.castle(color, CastleSide::QueenSide)
    }

    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::none();
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant = Some(target);
        self
    }

    #[must_use]
    pub const fn clear_en_passant(mut self) -> Self {
        self.en_passant = None;
        self
    }

    /// Set the halfmove clock (for 50-move rule).
    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    #[must_use]
    pub const fn fullmove_number(mut self, number: u32) -> Self {
        self.fullmove_number = number;
        self
    }

    /// Build the position, locating both kings.
    ///
    /// Fails with [`FenError::KingCount`] unless each color has exactly one king.
    pub fn build(self) -> Result<Position, FenError> {
        Position::from_parts(
            self.board,
            self.side_to_move,
            self.castling_rights,
            self.en_passant,
            self.halfmove_clock,
            self.fullmove_number,
        )
    }
}
