use super::super::{Board, MoveError, PieceKind, Square};

impl Board {
    /// Knights jump: only the L shape matters, never what stands between.
    pub(super) fn check_knight(&self, from: Square, to: Square) -> Result<(), MoveError> {
        let (dx, dy) = from.delta(to);
        match (dx.abs(), dy.abs()) {
            (2, 1) | (1, 2) => Ok(()),
            _ => Err(MoveError::IllegalGeometry {
                kind: PieceKind::Knight,
            }),
        }
    }
}
