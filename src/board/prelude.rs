//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use console_chess::board::prelude::*;
//!
//! let game = Game::new();
//! assert_eq!(game.turn(), Color::White);
//! ```

pub use super::{
    Board, BoardBuilder, Color, GlyphSet, MoveError, MoveOutcome, Piece, PieceKind, Square,
    SquareError,
};
pub use crate::game::Game;
