//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board, indexed 0..64.
///
/// `file = index % 8` (0 = file a), `rank = index / 8` (0 = rank 1), so a1 = 0,
/// h1 = 7 and h8 = 63. A `Square` value is always in range; "no square" is
/// spelled `Option::<Square>::None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Square(u8);

impl Square {
    pub const A1: Square = Square::at(0, 0);
    pub const C1: Square = Square::at(2, 0);
    pub const D1: Square = Square::at(3, 0);
    pub const E1: Square = Square::at(4, 0);
    pub const F1: Square = Square::at(5, 0);
    pub const G1: Square = Square::at(6, 0);
    pub const H1: Square = Square::at(7, 0);
    pub const A8: Square = Square::at(0, 7);
    pub const C8: Square = Square::at(2, 7);
    pub const D8: Square = Square::at(3, 7);
    pub const E8: Square = Square::at(4, 7);
    pub const F8: Square = Square::at(5, 7);
    pub const G8: Square = Square::at(6, 7);
    pub const H8: Square = Square::at(7, 7);

    /// Create a square from its index, or `None` if `index >= 64`.
    #[inline]
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Create a square from file (0 = a) and rank (0 = rank 1) with bounds checking.
    #[inline]
    #[must_use]
    pub const fn from_coords(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Square(rank * 8 + file))
        } else {
            None
        }
    }

    /// Infallible constructor for coordinates known to be on the board.
    #[inline]
    pub(crate) const fn at(file: u8, rank: u8) -> Self {
        assert!(file < 8 && rank < 8, "square coordinates off the board");
        Square(rank * 8 + file)
    }

    /// All 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// File 0-7, where 0 = file a.
    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Rank 0-7, where 0 = rank 1.
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Raw flat-array step. Only rejects results outside 0..64; a step can
    /// still wrap from one board edge to the other, see [`Square::step`].
    #[inline]
    pub(crate) const fn offset(self, delta: i8) -> Option<Square> {
        let idx = self.0 as i16 + delta as i16;
        if idx >= 0 && idx < 64 {
            Some(Square(idx as u8))
        } else {
            None
        }
    }

    /// One offset step that must move at most `reach` files and ranks.
    ///
    /// Rejects both off-board indices and steps that wrapped across the a/h
    /// edge, which show up as a file jump larger than the piece can make.
    #[inline]
    pub(crate) const fn step(self, delta: i8, reach: u8) -> Option<Square> {
        match self.offset(delta) {
            Some(to) if self.file_distance(to) <= reach && self.rank_distance(to) <= reach => {
                Some(to)
            }
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn file_distance(self, other: Square) -> u8 {
        self.file().abs_diff(other.file())
    }

    #[inline]
    #[must_use]
    pub const fn rank_distance(self, other: Square) -> u8 {
        self.rank().abs_diff(other.rank())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file() + b'a') as char, self.rank() + 1)
    }
}

impl TryFrom<u8> for Square {
    type Error = SquareError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Square::new(index).ok_or(SquareError::OutOfRange {
            index: i32::from(index),
        })
    }
}

impl TryFrom<i32> for Square {
    type Error = SquareError;

    fn try_from(index: i32) -> Result<Self, Self::Error> {
        u8::try_from(index)
            .ok()
            .and_then(Square::new)
            .ok_or(SquareError::OutOfRange { index })
    }
}

impl From<Square> for u8 {
    fn from(sq: Square) -> u8 {
        sq.0
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = match bytes[0] {
            b'a'..=b'h' => bytes[0] - b'a',
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            b'1'..=b'8' => bytes[1] - b'1',
            _ => return Err(invalid()),
        };
        Ok(Square::at(file, rank))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_layout() {
        assert_eq!(Square::A1.index(), 0);
        assert_eq!(Square::H1.index(), 7);
        assert_eq!(Square::A8.index(), 56);
        assert_eq!(Square::H8.index(), 63);
        let e4: Square = "e4".parse().unwrap();
        assert_eq!((e4.file(), e4.rank()), (4, 3));
        assert_eq!(e4.index(), 28);
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(Square::new(64).is_none());
        assert!(Square::from_coords(8, 0).is_none());
        assert!(Square::try_from(-1).is_err());
        assert_eq!(Square::try_from(63), Ok(Square::H8));
    }

    #[test]
    fn test_step_rejects_wraparound() {
        // h4 + 1 would be a5 in flat index arithmetic.
        let h4: Square = "h4".parse().unwrap();
        assert_eq!(h4.offset(1).map(|s| s.to_string()), Some("a5".to_string()));
        assert_eq!(h4.step(1, 1), None);
        // a1 - 1 leaves the array entirely.
        assert_eq!(Square::A1.step(-1, 1), None);
        // Knight jump from g1 by +10 lands on a3 without the guard.
        assert_eq!(Square::G1.step(10, 2), None);
        assert_eq!(Square::G1.step(15, 2).map(|s| s.to_string()), Some("f3".to_string()));
    }

    #[test]
    fn test_display_and_parse() {
        for sq in Square::all() {
            let text = sq.to_string();
            assert_eq!(text.parse::<Square>(), Ok(sq));
        }
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("a".parse::<Square>().is_err());
    }
}
