pub mod board;
pub mod game;
pub mod session;
pub mod sync;

pub use board::{Board, Color, MoveError, Piece, PieceKind, Square};
pub use game::Game;
pub use sync::SharedGame;
