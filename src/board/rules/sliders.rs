use super::super::{Board, MoveError, PieceKind, Square};

/// Unit step from `from` toward `to` when the two share a line `kind` can
/// slide along.
fn slide_step(kind: PieceKind, from: Square, to: Square) -> Option<(i8, i8)> {
    let (dx, dy) = from.delta(to);
    let straight = dx == 0 || dy == 0;
    let diagonal = dx.abs() == dy.abs();

    if (straight && kind.moves_straight()) || (diagonal && kind.moves_diagonally()) {
        Some((dx.signum(), dy.signum()))
    } else {
        None
    }
}

impl Board {
    /// Rook, bishop and queen: the target must lie on one of the piece's rays
    /// and every square strictly between must be empty. The destination is
    /// only checked for color, by the caller.
    pub(super) fn check_slide(
        &self,
        kind: PieceKind,
        from: Square,
        to: Square,
    ) -> Result<(), MoveError> {
        let (sx, sy) = slide_step(kind, from, to).ok_or(MoveError::IllegalGeometry { kind })?;

        let mut current = from.offset(sx, sy);
        while let Some(sq) = current {
            if sq == to {
                return Ok(());
            }
            if !self.is_empty(sq) {
                return Err(MoveError::PathBlocked { at: sq });
            }
            current = sq.offset(sx, sy);
        }

        // The walk left the board without meeting `to`; slide_step rules this out.
        Err(MoveError::IllegalGeometry { kind })
    }
}
