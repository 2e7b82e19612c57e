//! Core chess types.
//!
//! - `Square` - board square indexed 0..64 (a1 = 0, h8 = 63)
//! - `Color`, `PieceType`, `Piece` - the piece vocabulary
//! - `CastlingRights`, `CastleSide` - castling state and geometry
//! - `Move`, `MoveKind`, `MoveFlags` - move representation

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{CastleSide, CastlingRights};
pub use moves::{Move, MoveFlags, MoveKind};
pub use piece::{Color, Piece, PieceType};
pub use square::Square;

pub(crate) use piece::PROMOTION_PIECES;
