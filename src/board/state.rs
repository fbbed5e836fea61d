use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, PieceKind, Square, BOARD_SIZE};

static STARTING_BOARD: Lazy<Board> = Lazy::new(|| {
    let mut board = Board::empty();
    for (x, kind) in PieceKind::BACK_RANK.iter().enumerate() {
        for color in Color::BOTH {
            let back = color.back_rank() as usize;
            let pawns = color.pawn_start_rank() as usize;
            board.cells[back][x] = Some(Piece::new(color, *kind));
            board.cells[pawns][x] = Some(Piece::new(color, PieceKind::Pawn));
        }
    }
    board
});

/// A piece together with the square that holds it.
///
/// Only produced by reading the board, so `square()` always agrees with the
/// cell the piece occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacedPiece {
    square: Square,
    piece: Piece,
}

impl PlacedPiece {
    #[inline]
    #[must_use]
    pub const fn square(self) -> Square {
        self.square
    }

    #[inline]
    #[must_use]
    pub const fn piece(self) -> Piece {
        self.piece
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        self.piece.color()
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> PieceKind {
        self.piece.kind()
    }
}

/// The 8×8 grid. Cells are indexed `[y][x]`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// The standard starting arrangement.
    #[must_use]
    pub fn new() -> Self {
        STARTING_BOARD.clone()
    }

    /// A board with no pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Occupant of `sq`, if any.
    #[inline]
    #[must_use]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.y()][sq.x()]
    }

    /// Occupant of raw coordinates; `None` when they are off the board.
    #[must_use]
    pub fn get_xy(&self, x: usize, y: usize) -> Option<Piece> {
        Square::new(x, y).and_then(|sq| self.get(sq))
    }

    /// Occupant of `sq` paired with its square.
    #[must_use]
    pub fn placed(&self, sq: Square) -> Option<PlacedPiece> {
        self.get(sq).map(|piece| PlacedPiece { square: sq, piece })
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// Color of the piece on `sq`
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.get(sq).map(Piece::color)
    }

    /// Every occupied cell in square order (a1, b1, ..., h8).
    pub fn pieces(&self) -> impl Iterator<Item = PlacedPiece> + '_ {
        Square::all().filter_map(move |sq| self.placed(sq))
    }

    pub(crate) fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.cells[sq.y()][sq.x()] = piece;
    }

    pub(crate) fn take(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.y()][sq.x()].take()
    }

    /// Square of `color`'s king. With several kings (builder positions) the
    /// first in square order wins.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|p| p.kind() == PieceKind::King && p.color() == color)
            .map(PlacedPiece::square)
    }

    #[must_use]
    pub fn has_king(&self, color: Color) -> bool {
        self.find_king(color).is_some()
    }

    /// Number of pieces of `color` on the board
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.pieces().filter(|p| p.color() == color).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(x: usize, y: usize) -> Square {
        Square::new(x, y).unwrap()
    }

    #[test]
    fn test_starting_layout() {
        let board = Board::new();
        for (x, kind) in PieceKind::BACK_RANK.iter().enumerate() {
            assert_eq!(board.get(sq(x, 0)), Some(Piece::new(Color::White, *kind)));
            assert_eq!(board.get(sq(x, 7)), Some(Piece::new(Color::Black, *kind)));
            assert_eq!(
                board.get(sq(x, 1)),
                Some(Piece::new(Color::White, PieceKind::Pawn))
            );
            assert_eq!(
                board.get(sq(x, 6)),
                Some(Piece::new(Color::Black, PieceKind::Pawn))
            );
            for y in 2..6 {
                assert!(board.is_empty(sq(x, y)));
            }
        }
        assert_eq!(board.count(Color::White), 16);
        assert_eq!(board.count(Color::Black), 16);
    }

    #[test]
    fn test_kings_on_e_file() {
        let board = Board::new();
        assert_eq!(board.find_king(Color::White), Some(sq(4, 0)));
        assert_eq!(board.find_king(Color::Black), Some(sq(4, 7)));
    }

    #[test]
    fn test_get_xy_out_of_range() {
        let board = Board::new();
        assert!(board.get_xy(8, 0).is_none());
        assert!(board.get_xy(0, 100).is_none());
        assert!(board.get_xy(0, 0).is_some());
    }

    #[test]
    fn test_placed_reports_its_cell() {
        let board = Board::new();
        for placed in board.pieces() {
            assert_eq!(board.get(placed.square()), Some(placed.piece()));
        }
    }

    #[test]
    fn test_empty_board_has_no_kings() {
        let board = Board::empty();
        assert!(!board.has_king(Color::White));
        assert!(!board.has_king(Color::Black));
        assert_eq!(board.pieces().count(), 0);
    }
}
