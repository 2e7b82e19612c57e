//! Terminal-state classification.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, PieceType, Position};

/// Half-moves without a pawn move or capture after which the game is drawn.
pub const FIFTY_MOVE_LIMIT: u32 = 100;

/// Why a game ended in a draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DrawReason {
    Stalemate,
    FiftyMoveRule,
    InsufficientMaterial,
    /// Only reported by [`crate::Game`], which keeps the move history.
    ThreefoldRepetition,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    Ongoing,
    WhiteWins,
    BlackWins,
    Draw(DrawReason),
}

impl Outcome {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// The winning color, if the game was decided.
    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            Outcome::WhiteWins => Some(Color::White),
            Outcome::BlackWins => Some(Color::Black),
            Outcome::Ongoing | Outcome::Draw(_) => None,
        }
    }

    const fn win_for(color: Color) -> Outcome {
        match color {
            Color::White => Outcome::WhiteWins,
            Color::Black => Outcome::BlackWins,
        }
    }
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            DrawReason::Stalemate => "stalemate",
            DrawReason::FiftyMoveRule => "fifty-move rule",
            DrawReason::InsufficientMaterial => "insufficient material",
            DrawReason::ThreefoldRepetition => "threefold repetition",
        };
        f.write_str(text)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ongoing => f.write_str("ongoing"),
            Outcome::WhiteWins => f.write_str("1-0"),
            Outcome::BlackWins => f.write_str("0-1"),
            Outcome::Draw(reason) => write!(f, "1/2-1/2 ({reason})"),
        }
    }
}

impl Position {
    /// Classify the position.
    ///
    /// Checked in order: no legal moves (checkmate or stalemate), the
    /// fifty-move rule, insufficient material. Repetition needs the game
    /// history and is left to [`crate::Game::outcome`].
    pub fn outcome(&mut self) -> Outcome {
        let outcome = if self.generate_legal_moves().is_empty() {
            if self.is_in_check() {
                Outcome::win_for(self.side_to_move.opponent())
            } else {
                Outcome::Draw(DrawReason::Stalemate)
            }
        } else if self.is_fifty_move_draw() {
            Outcome::Draw(DrawReason::FiftyMoveRule)
        } else if self.has_insufficient_material() {
            Outcome::Draw(DrawReason::InsufficientMaterial)
        } else {
            Outcome::Ongoing
        };

        if outcome.is_terminal() {
            log::debug!("terminal position {}: {outcome}", self.to_fen());
        }
        outcome
    }

    #[inline]
    #[must_use]
    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= FIFTY_MOVE_LIMIT
    }

    /// No pawns, rooks or queens on the board and at most one minor piece
    /// in total. K+minor vs K+minor and K+two minors are not covered.
    #[must_use]
    pub fn has_insufficient_material(&self) -> bool {
        let mut minors = 0;
        for (_, piece) in self.board.pieces() {
            match piece.kind {
                PieceType::King => {}
                PieceType::Knight | PieceType::Bishop => minors += 1,
                PieceType::Pawn | PieceType::Rook | PieceType::Queen => return false,
            }
        }
        minors <= 1
    }
}
