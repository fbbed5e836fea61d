//! Board module tests.
//!
//! - `rules.rs` - per-kind legality
//! - `make_move.rs` - move application and rejection atomicity
//! - `proptest.rs` - property-based tests over random positions and games


use super::Square;

pub(super) fn sq(x: usize, y: usize) -> Square {
    Square::new(x, y).unwrap()
}

/// Parse algebraic notation in tests.
pub(super) fn at(notation: &str) -> Square {
    notation.parse().unwrap()
}
