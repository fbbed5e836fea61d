//! Per-kind movement legality.
//!
//! Every check here takes `&Board`: evaluating a move never mutates anything.
//! The only mutation step lives in `make_move.rs` and runs after a successful
//! check.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, MoveError, Piece, PieceKind, Square};

impl Board {
    /// Checks whether the piece on `from` may move to `to`, naming the reason
    /// when it may not.
    ///
    /// Turn order is not considered here; that belongs to `Game`.
    pub fn check_move(&self, from: Square, to: Square) -> Result<(), MoveError> {
        let piece = self.get(from).ok_or(MoveError::EmptySource { from })?;
        self.check_piece_move(piece, from, to)
    }

    /// Boolean form of [`Board::check_move`].
    #[inline]
    #[must_use]
    pub fn can_move(&self, from: Square, to: Square) -> bool {
        self.check_move(from, to).is_ok()
    }

    /// Every square the piece on `from` may move to, in square order.
    /// Empty when `from` is empty.
    #[must_use]
    pub fn legal_targets(&self, from: Square) -> Vec<Square> {
        let Some(piece) = self.get(from) else {
            return Vec::new();
        };
        Square::all()
            .filter(|&to| self.check_piece_move(piece, from, to).is_ok())
            .collect()
    }

    fn check_piece_move(&self, piece: Piece, from: Square, to: Square) -> Result<(), MoveError> {
        if from == to {
            return Err(MoveError::SameSquare);
        }
        if self.color_on(to) == Some(piece.color()) {
            return Err(MoveError::FriendlyFire { target: to });
        }

        match piece.kind() {
            PieceKind::Pawn => self.check_pawn(piece, from, to),
            PieceKind::Knight => self.check_knight(from, to),
            PieceKind::King => self.check_king(from, to),
            kind @ (PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen) => {
                self.check_slide(kind, from, to)
            }
        }
    }
}
