//! Core chess types.
//!
//! - `PieceKind`, `Color` and `Piece` - piece kinds, sides and colored pieces
//! - `Square` - validated board coordinate

mod piece;
mod square;

pub use piece::{Color, Piece, PieceKind};
pub use square::{Square, BOARD_SIZE};
