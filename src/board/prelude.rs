//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let position = Position::new();
//! assert_eq!(position.side_to_move(), Color::White);
//! ```

pub use super::{
    Board, CastleSide, CastlingRights, Color, DrawReason, FenError, Move, MoveKind,
    MoveParseError, Outcome, Piece, PieceType, Position, PositionBuilder, Square, UndoInfo,
};
