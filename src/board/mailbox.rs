//! Raw 64-cell piece storage, independent of game rules.

use std::fmt;
use std::ops::Index;

use super::{Color, Piece, PieceType, Square};

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// One cell per square, `None` for empty. Copying a `Board` copies all 64 cells.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Piece>; 64],
}

impl Board {
    /// A board with no pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Board { cells: [None; 64] }
    }

    /// The standard starting arrangement.
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Board::empty();
        for color in Color::BOTH {
            let back = color.back_rank();
            let pawns = color.pawn_start_rank();
            for (file, kind) in (0u8..).zip(BACK_RANK) {
                board.set(Square::at(file, back), Some(Piece::new(kind, color)));
                board.set(
                    Square::at(file, pawns),
                    Some(Piece::new(PieceType::Pawn, color)),
                );
            }
        }
        board
    }

    #[inline]
    #[must_use]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.cells[sq.index()] = piece;
    }

    /// Set by raw index. An index outside 0..64 is silently ignored.
    pub fn set_index(&mut self, index: i32, piece: Option<Piece>) {
        match Square::try_from(index) {
            Ok(sq) => self.set(sq, piece),
            Err(_) => log::trace!("ignoring set on off-board index {index}"),
        }
    }

    /// Empty the square and return what stood there.
    #[inline]
    pub(crate) fn take(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()].take()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_none()
    }

    /// True if `sq` holds a piece of the opponent of `color`.
    #[inline]
    #[must_use]
    pub fn is_enemy_of(&self, sq: Square, color: Color) -> bool {
        matches!(self.get(sq), Some(p) if p.color != color)
    }

    /// True if `sq` holds a piece of `color`.
    #[inline]
    #[must_use]
    pub fn is_ally_of(&self, sq: Square, color: Color) -> bool {
        matches!(self.get(sq), Some(p) if p.color == color)
    }

    /// Occupied squares in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }

    /// Number of pieces of the given kind and color.
    #[must_use]
    pub fn count(&self, kind: PieceType, color: Color) -> usize {
        self.pieces().filter(|(_, p)| p.is(kind, color)).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, sq: Square) -> &Self::Output {
        &self.cells[sq.index()]
    }
}

/// Text grid, rank 8 at the top, file labels underneath.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} |", rank + 1)?;
            for file in 0..8 {
                match self.get(Square::at(file, rank)) {
                    Some(piece) => write!(f, " {piece}")?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "  +----------------")?;
        write!(f, "   ")?;
        for file in b'a'..=b'h' {
            write!(f, " {}", file as char)?;
        }
        writeln!(f)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board")?;
        fmt::Display::fmt(self, f)
    }
}
