use super::super::{Board, MoveError, PieceKind, Square};

impl Board {
    /// One square in any direction. A zero step never reaches here: the
    /// same-square check runs first.
    pub(super) fn check_king(&self, from: Square, to: Square) -> Result<(), MoveError> {
        let (dx, dy) = from.delta(to);
        if dx.abs() <= 1 && dy.abs() <= 1 {
            Ok(())
        } else {
            Err(MoveError::IllegalGeometry {
                kind: PieceKind::King,
            })
        }
    }
}
