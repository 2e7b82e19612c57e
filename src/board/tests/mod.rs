//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Node counts of the legal move tree
//! - `draw.rs` - Outcome classification and clocks
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `edge_cases.rs` - Special positions and edge cases
//! - `proptest.rs` - Property-based tests

mod edge_cases;

use crate::board::{Move, PieceType, Position, Square};

pub(super) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

pub(super) fn find_move(
    position: &mut Position,
    from: &str,
    to: &str,
    promotion: Option<PieceType>,
) -> Move {
    let (from, to) = (sq(from), sq(to));
    position
        .generate_legal_moves()
        .into_iter()
        .find(|m| m.from == from && m.to == to && m.promotion() == promotion)
        .expect("Expected move not found")
}
