//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece instead of playing moves from the
//! starting arrangement.
//!
//! # Example
//! ```
//! use console_chess::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let e1 = Square::new(4, 0).unwrap();
//! let e8 = Square::new(4, 7).unwrap();
//! let board = BoardBuilder::new()
//!     .piece(e1, Color::White, PieceKind::King)
//!     .piece(e8, Color::Black, PieceKind::King)
//!     .build();
//! assert!(board.has_king(Color::Black));
//! ```

use super::{Board, Color, Piece, PieceKind, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Piece)>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            pieces: Board::new()
                .pieces()
                .map(|p| (p.square(), p.piece()))
                .collect(),
        }
    }

    /// Place an unmoved piece, replacing any piece on that square.
    #[must_use]
    pub fn piece(self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.place(square, Piece::new(color, kind))
    }

    /// Place a pawn that has already used its first move.
    #[must_use]
    pub fn moved_pawn(self, square: Square, color: Color) -> Self {
        self.place(square, Piece::new(color, PieceKind::Pawn).marked_moved())
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    fn place(mut self, square: Square, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, piece));
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (square, piece) in self.pieces {
            board.set(square, Some(piece));
        }
        board
    }
}
