use std::fmt;
use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::{
    Board, CastleSide, CastlingRights, Color, Move, Piece, PieceType, Position, Square, UndoInfo,
    PROMOTION_PIECES,
};

const CASTLING_LETTERS: [(char, Color, CastleSide); 4] = [
    ('K', Color::White, CastleSide::KingSide),
    ('Q', Color::White, CastleSide::QueenSide),
    ('k', Color::Black, CastleSide::KingSide),
    ('q', Color::Black, CastleSide::QueenSide),
];

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// All six fields are required. The king cache is rebuilt by scanning the
    /// parsed board.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() != 6 {
            return Err(FenError::WrongFieldCount { found: parts.len() });
        }

        let board = parse_placement(parts[0])?;

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let castling_rights = parse_castling(parts[2])?;
        let en_passant = parse_en_passant(parts[3], side_to_move)?;
        let halfmove_clock = parse_clock(parts[4], "half-move clock")?;
        let fullmove_number = parse_clock(parts[5], "full-move number")?;

        let position = Position::from_parts(
            board,
            side_to_move,
            castling_rights,
            en_passant,
            halfmove_clock,
            fullmove_number,
        )?;
        log::debug!("parsed FEN {fen}");
        Ok(position)
    }

    /// Convert the position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some(piece) = self.board.get(Square::at(file, rank)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let mut castling: String = CASTLING_LETTERS
            .iter()
            .filter(|(_, color, side)| self.castling_rights.has(*color, *side))
            .map(|(c, _, _)| *c)
            .collect();
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = self
            .en_passant
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            castling,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Parse a move in coordinate notation (e.g., "e2e4", "e7e8q").
    ///
    /// Returns the matching legal move, which carries the right kind for
    /// make/unmake.
    ///
    /// # Example
    /// ```
    /// use chess_rules::Position;
    ///
    /// let mut position = Position::new();
    /// let mv = position.parse_move("e2e4").unwrap();
    /// assert!(mv.is_double_push());
    /// ```
    pub fn parse_move(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        let chars: Vec<char> = notation.chars().collect();
        if chars.len() < 4 {
            return Err(MoveParseError::TooShort { len: chars.len() });
        }
        if chars.len() > 5 {
            return Err(MoveParseError::TooLong { len: chars.len() });
        }

        let parse_square = |pair: &[char]| -> Result<Square, MoveParseError> {
            pair.iter()
                .collect::<String>()
                .parse()
                .map_err(|_| MoveParseError::InvalidSquare {
                    notation: notation.to_string(),
                })
        };
        let from = parse_square(&chars[0..2])?;
        let to = parse_square(&chars[2..4])?;

        let promotion = match chars.get(4) {
            Some(&c) => {
                let piece = PieceType::from_char(c)
                    .filter(|piece| PROMOTION_PIECES.contains(piece))
                    .ok_or(MoveParseError::InvalidPromotion { char: c })?;
                Some(piece)
            }
            None => None,
        };

        self.generate_legal_moves()
            .into_iter()
            .find(|mv| mv.from == from && mv.to == to && mv.promotion() == promotion)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: notation.to_string(),
            })
    }

    /// Parse a coordinate move and make it in one call.
    ///
    /// # Example
    /// ```
    /// use chess_rules::Position;
    ///
    /// let mut position = Position::new();
    /// let (e4, undo) = position.play_uci("e2e4").unwrap();
    /// position.unmake_move(e4, undo);
    /// assert_eq!(position, Position::new());
    /// ```
    pub fn play_uci(&mut self, notation: &str) -> Result<(Move, UndoInfo), MoveParseError> {
        let mv = self.parse_move(notation)?;
        let undo = self.make_move(mv);
        Ok((mv, undo))
    }
}

fn parse_placement(placement: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut board = Board::empty();
    for (row, rank_str) in ranks.iter().enumerate() {
        let rank_number = 8 - row;
        let rank = 7 - row as u8;
        let mut file: u8 = 0;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                file += skip as u8;
                if file > 8 {
                    return Err(FenError::RankOverflow { rank: rank_number });
                }
                continue;
            }
            let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
            if file >= 8 {
                return Err(FenError::RankOverflow { rank: rank_number });
            }
            board.set(Square::at(file, rank), Some(piece));
            file += 1;
        }
        if file < 8 {
            return Err(FenError::RankUnderflow { rank: rank_number });
        }
    }
    Ok(board)
}

fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    let mut rights = CastlingRights::none();
    if field == "-" {
        return Ok(rights);
    }
    for c in field.chars() {
        let (_, color, side) = CASTLING_LETTERS
            .iter()
            .find(|(letter, _, _)| *letter == c)
            .ok_or(FenError::InvalidCastling { char: c })?;
        rights.insert(*color, *side);
    }
    Ok(rights)
}

/// The target must sit on the rank the opponent's pawn just skipped.
fn parse_en_passant(field: &str, side_to_move: Color) -> Result<Option<Square>, FenError> {
    if field == "-" {
        return Ok(None);
    }
    let invalid = || FenError::InvalidEnPassant {
        found: field.to_string(),
    };
    let sq: Square = field.parse().map_err(|_| invalid())?;
    let expected_rank = match side_to_move {
        Color::White => 5,
        Color::Black => 2,
    };
    if sq.rank() != expected_rank {
        return Err(invalid());
    }
    Ok(Some(sq))
}

fn parse_clock(field: &str, name: &'static str) -> Result<u32, FenError> {
    field.parse().map_err(|_| FenError::InvalidClock {
        field: name,
        found: field.to_string(),
    })
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

/// Prints the FEN.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fen())
    }
}
