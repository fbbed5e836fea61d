use log::trace;

use super::{Board, MoveError, Piece, PieceKind, Square};

/// What an accepted move did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub from: Square,
    pub to: Square,
    /// The mover as it stands on `to` after the move
    pub piece: Piece,
    /// Occupant of `to` that was removed, if any
    pub captured: Option<Piece>,
}

impl MoveOutcome {
    #[inline]
    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// True when the move removed a king from the board.
    #[inline]
    #[must_use]
    pub fn captured_king(&self) -> bool {
        self.captured.map(Piece::kind) == Some(PieceKind::King)
    }
}

impl Board {
    /// Moves the piece on `from` to `to` if its rule allows it.
    ///
    /// On `Err` the board is untouched. On `Ok` the source is cleared, the
    /// destination occupant (if any) is discarded and a pawn loses its
    /// double-step right.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        self.check_move(from, to)?;

        let piece = self
            .take(from)
            .ok_or(MoveError::EmptySource { from })?;
        let piece = if piece.kind() == PieceKind::Pawn {
            piece.marked_moved()
        } else {
            piece
        };
        let captured = self.take(to);
        self.set(to, Some(piece));

        trace!("{piece} {from}-{to}");
        Ok(MoveOutcome {
            from,
            to,
            piece,
            captured,
        })
    }

    /// Boolean form of [`Board::apply_move`].
    pub fn make_move(&mut self, from: Square, to: Square) -> bool {
        self.apply_move(from, to).is_ok()
    }
}
