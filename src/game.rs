//! A position together with the moves that led to it.
//!
//! [`Position`] alone cannot see repetitions. [`Game`] keeps the stack of
//! played moves with their undo records and the Zobrist hash of every
//! position reached, so it can report threefold repetition and take moves
//! back in order.

use crate::board::{DrawReason, Move, MoveParseError, Outcome, Position, UndoInfo};

/// Occurrences of one position that make a draw.
const REPETITION_LIMIT: usize = 3;

#[derive(Clone, Debug)]
struct PlayedMove {
    mv: Move,
    undo: UndoInfo,
    /// Hash of the position after `mv`.
    hash: u64,
}

/// A game in progress.
///
/// # Example
/// ```
/// use chess_rules::{DrawReason, Game, Outcome};
///
/// let mut game = Game::new();
/// for mv in ["g1f3", "g8f6", "f3g1", "f6g8", "g1f3", "g8f6", "f3g1", "f6g8"] {
///     game.play_uci(mv).unwrap();
/// }
/// assert_eq!(game.repetition_count(), 3);
/// assert_eq!(game.outcome(), Outcome::Draw(DrawReason::ThreefoldRepetition));
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    position: Position,
    initial_hash: u64,
    history: Vec<PlayedMove>,
}

impl Game {
    /// A game from the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Game::from_position(Position::new())
    }

    /// A game whose history starts at `position`.
    #[must_use]
    pub fn from_position(position: Position) -> Self {
        let initial_hash = position.zobrist_hash();
        Game {
            position,
            initial_hash,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Moves played so far, oldest first.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.history.iter().map(|played| played.mv)
    }

    pub fn legal_moves(&mut self) -> Vec<Move> {
        self.position.generate_legal_moves()
    }

    /// Play `mv` if it is legal in the current position.
    pub fn play(&mut self, mv: Move) -> Result<(), MoveParseError> {
        if !self.position.generate_legal_moves().contains(&mv) {
            return Err(MoveParseError::IllegalMove {
                notation: mv.to_string(),
            });
        }
        self.push(mv);
        Ok(())
    }

    /// Parse a coordinate move and play it.
    pub fn play_uci(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        let mv = self.position.parse_move(notation)?;
        self.push(mv);
        Ok(mv)
    }

    fn push(&mut self, mv: Move) {
        let undo = self.position.make_move(mv);
        let hash = self.position.zobrist_hash();
        log::debug!("played {mv}, now {}", self.position.to_fen());
        self.history.push(PlayedMove { mv, undo, hash });
    }

    /// Take back the last move, returning it. `None` at the start of the game.
    pub fn undo(&mut self) -> Option<Move> {
        let played = self.history.pop()?;
        self.position.unmake_move(played.mv, played.undo);
        log::debug!("took back {}", played.mv);
        Some(played.mv)
    }

    /// How many times the current position has occurred, itself included.
    #[must_use]
    pub fn repetition_count(&self) -> usize {
        let current = self.current_hash();
        std::iter::once(self.initial_hash)
            .chain(self.history.iter().map(|played| played.hash))
            .filter(|&hash| hash == current)
            .count()
    }

    /// [`Position::outcome`], plus threefold repetition when the position
    /// itself is still ongoing.
    pub fn outcome(&mut self) -> Outcome {
        match self.position.outcome() {
            Outcome::Ongoing if self.repetition_count() >= REPETITION_LIMIT => {
                log::debug!("threefold repetition at {}", self.position.to_fen());
                Outcome::Draw(DrawReason::ThreefoldRepetition)
            }
            outcome => outcome,
        }
    }

    fn current_hash(&self) -> u64 {
        self.history
            .last()
            .map_or(self.initial_hash, |played| played.hash)
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
