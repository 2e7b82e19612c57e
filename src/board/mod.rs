//! Chess position representation and rules.
//!
//! A [`Position`] is a 64-cell [`Board`] plus side to move, castling rights,
//! en-passant target, clocks and a cached king square per color. Moves are
//! applied with [`Position::make_move`], which returns an [`UndoInfo`] that
//! [`Position::unmake_move`] consumes to restore the prior position exactly.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, Position};
//!
//! let mut position = Position::new();
//! let moves = position.generate_legal_moves();
//! assert_eq!(moves.len(), 20);
//! assert_eq!(position.side_to_move(), Color::White);
//! ```

mod attacks;
mod builder;
mod error;
mod fen;
mod mailbox;
mod make_unmake;
mod movegen;
mod outcome;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{FenError, MoveParseError, SquareError};
pub use mailbox::Board;
pub use outcome::{DrawReason, Outcome};
pub use state::{Position, UndoInfo, START_FEN};
pub use types::{
    CastleSide, CastlingRights, Color, Move, MoveFlags, MoveKind, Piece, PieceType, Square,
};

pub(crate) use types::PROMOTION_PIECES;
