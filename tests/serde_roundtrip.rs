#![cfg(feature = "serde")]

use console_chess::board::Square;
use console_chess::Game;

#[test]
fn game_survives_json_roundtrip() {
    let mut game = Game::new();
    assert!(game.move_piece(4, 1, 4, 3));
    assert!(game.move_piece(3, 6, 3, 4));

    let json = serde_json::to_string(&game).unwrap();
    let restored: Game = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, game);

    // The moved pawn keeps its lost double-step right.
    let e4 = Square::new(4, 3).unwrap();
    let e6 = Square::new(4, 5).unwrap();
    assert!(!restored.board().can_move(e4, e6));
}

#[test]
fn square_rejects_out_of_range_json() {
    assert!(serde_json::from_str::<Square>("[3, 9]").is_err());
    let sq: Square = serde_json::from_str("[3, 4]").unwrap();
    assert_eq!(sq.to_string(), "d5");
}
