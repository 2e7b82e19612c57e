//! Correctness-first chess rules engine.
//!
//! Maintains a legal chess position, enumerates legal moves, makes and unmakes
//! moves with exact reversibility, detects check and classifies terminal
//! positions. There is no search or evaluation here; this is the layer such
//! things are built on.
//!
//! # Example
//! ```
//! use chess_rules::{Outcome, Position};
//!
//! let mut position = Position::new();
//! assert_eq!(position.generate_legal_moves().len(), 20);
//!
//! let (mv, undo) = position.play_uci("e2e4").unwrap();
//! assert_eq!(position.to_fen(), "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
//! position.unmake_move(mv, undo);
//! assert_eq!(position, Position::new());
//! assert_eq!(position.outcome(), Outcome::Ongoing);
//! ```

pub mod board;
pub mod game;
pub mod zobrist;

pub use board::{
    Board, CastleSide, CastlingRights, Color, DrawReason, FenError, Move, MoveFlags, MoveKind,
    MoveParseError, Outcome, Piece, PieceType, Position, PositionBuilder, Square, SquareError,
    UndoInfo,
};
pub use game::Game;
