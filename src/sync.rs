//! Shared handle for hosts that drive one game from several threads.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::board::{Board, Color, MoveError, MoveOutcome, Square};
use crate::game::Game;

/// A cloneable, lock-protected game.
///
/// Every move goes through the mutex, so concurrent callers see moves applied
/// one at a time and never observe a half-applied move.
#[derive(Clone, Debug, Default)]
pub struct SharedGame(Arc<Mutex<Game>>);

impl SharedGame {
    #[must_use]
    pub fn new(game: Game) -> Self {
        SharedGame(Arc::new(Mutex::new(game)))
    }

    pub fn move_piece(&self, src_x: usize, src_y: usize, dst_x: usize, dst_y: usize) -> bool {
        self.0.lock().move_piece(src_x, src_y, dst_x, dst_y)
    }

    pub fn try_move(&self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        self.0.lock().try_move(from, to)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.0.lock().is_finished()
    }

    #[must_use]
    pub fn turn(&self) -> Color {
        self.0.lock().turn()
    }

    /// Copy of the current board.
    #[must_use]
    pub fn board(&self) -> Board {
        self.0.lock().board().clone()
    }

    /// Runs `f` with exclusive access to the game.
    pub fn with<R>(&self, f: impl FnOnce(&mut Game) -> R) -> R {
        f(&mut *self.0.lock())
    }
}

impl From<Game> for SharedGame {
    fn from(game: Game) -> Self {
        SharedGame::new(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clones_share_state() {
        let shared = SharedGame::new(Game::new());
        let other = shared.clone();
        assert!(shared.move_piece(4, 1, 4, 3));
        assert_eq!(other.turn(), Color::Black);
    }

    #[test]
    fn test_concurrent_race_for_one_move() {
        // Both threads try the same White move; exactly one can succeed.
        let shared = SharedGame::default();
        let handles: Vec<_> = (0..2)
            .map(|_| {
                let game = shared.clone();
                thread::spawn(move || game.move_piece(3, 1, 3, 3))
            })
            .collect();
        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|&ok| ok)
            .count();
        assert_eq!(successes, 1);
        assert_eq!(shared.turn(), Color::Black);
    }

    #[test]
    fn test_with_exposes_game() {
        let shared = SharedGame::default();
        let pieces = shared.with(|game| game.board().pieces().count());
        assert_eq!(pieces, 32);
    }
}
