//! Board representation and movement rules.
//!
//! The board is a plain 8×8 grid of optional pieces. Move legality is a
//! read-only check over `&Board`; the single mutation step runs only after
//! that check passes, so a rejected move leaves the board untouched.
//!
//! # Example
//! ```
//! use console_chess::board::{Board, Square};
//!
//! let mut board = Board::new();
//! let e2 = Square::new(4, 1).unwrap();
//! let e4 = Square::new(4, 3).unwrap();
//! assert!(board.can_move(e2, e4));
//! assert!(board.make_move(e2, e4));
//! assert!(board.get(e2).is_none());
//! ```

mod builder;
mod error;
mod make_move;
pub mod prelude;
mod render;
mod rules;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{MoveError, SquareError};
pub use make_move::MoveOutcome;
pub use render::GlyphSet;
pub use state::{Board, PlacedPiece};
pub use types::{Color, Piece, PieceKind, Square, BOARD_SIZE};
