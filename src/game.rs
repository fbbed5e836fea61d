//! Turn order and termination.
//!
//! A game ends when either king has been captured. There is no check,
//! checkmate or draw detection: the only way to finish is to take a king.

use log::{debug, info};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, MoveError, MoveOutcome, Square};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Game {
    board: Board,
    turn: Color,
}

impl Game {
    /// Standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Game::from_board(Board::new(), Color::White)
    }

    /// Arbitrary position with `turn` to move.
    #[must_use]
    pub fn from_board(board: Board, turn: Color) -> Self {
        Game { board, turn }
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move
    #[inline]
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Moves the piece on `(src_x, src_y)` to `(dst_x, dst_y)`.
    ///
    /// Coordinates are zero-based: x is the file (a = 0), y the rank
    /// (rank 1 = 0). Returns `false` and changes nothing when any coordinate
    /// is off the board, the source is empty or belongs to the other side, or
    /// the piece cannot reach the destination.
    pub fn move_piece(&mut self, src_x: usize, src_y: usize, dst_x: usize, dst_y: usize) -> bool {
        match (Square::new(src_x, src_y), Square::new(dst_x, dst_y)) {
            (Some(from), Some(to)) => self.move_squares(from, to),
            _ => {
                debug!("rejected ({src_x},{src_y})-({dst_x},{dst_y}): {}", MoveError::OffBoard);
                false
            }
        }
    }

    /// [`Game::move_piece`] with validated squares.
    pub fn move_squares(&mut self, from: Square, to: Square) -> bool {
        self.try_move(from, to).is_ok()
    }

    /// Plays `from`-`to` for the side to move and flips the turn on success.
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        let result = self.validate_owner(from).and_then(|()| self.board.apply_move(from, to));

        match &result {
            Ok(outcome) => {
                match outcome.captured {
                    Some(captured) => info!("{} {from}x{to} takes {captured}", self.turn),
                    None => info!("{} {from}-{to}", self.turn),
                }
                self.turn = self.turn.opponent();
                if let Some(winner) = self.winner() {
                    info!("game over, {winner} wins");
                }
            }
            Err(err) => debug!("rejected {from}-{to}: {err}"),
        }
        result
    }

    fn validate_owner(&self, from: Square) -> Result<(), MoveError> {
        match self.board.color_on(from) {
            None => Err(MoveError::EmptySource { from }),
            Some(color) if color != self.turn => Err(MoveError::NotYourTurn { turn: self.turn }),
            Some(_) => Ok(()),
        }
    }

    /// True once at least one king is missing from the board.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        !(self.board.has_king(Color::White) && self.board.has_king(Color::Black))
    }

    /// The side whose king remains when exactly one king is left.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        match (
            self.board.has_king(Color::White),
            self.board.has_king(Color::Black),
        ) {
            (true, false) => Some(Color::White),
            (false, true) => Some(Color::Black),
            _ => None,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
