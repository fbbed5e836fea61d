use super::super::{Board, MoveError, Piece, Square};

impl Board {
    /// Single step, first-move double step, or diagonal capture. No en
    /// passant and no promotion.
    pub(super) fn check_pawn(&self, pawn: Piece, from: Square, to: Square) -> Result<(), MoveError> {
        let dir = pawn.color().pawn_direction();
        let (dx, dy) = from.delta(to);

        if dx == 0 {
            if dy == dir && self.is_empty(to) {
                return Ok(());
            }
            if dy == 2 * dir && pawn.can_double_step() && self.is_empty(to) {
                let middle = from.offset(0, dir).ok_or(MoveError::IllegalPawnMove)?;
                if self.is_empty(middle) {
                    return Ok(());
                }
                return Err(MoveError::PathBlocked { at: middle });
            }
        } else if dx.abs() == 1 && dy == dir {
            // Friendly occupants were rejected before dispatch.
            if !self.is_empty(to) {
                return Ok(());
            }
        }

        Err(MoveError::IllegalPawnMove)
    }
}
