//! Piece kind, color and the colored piece value stored on the board.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds in index order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Back rank arrangement from file a to file h.
    pub const BACK_RANK: [PieceKind; 8] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];

    /// Lowercase letter for this kind
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn moves_straight(self) -> bool {
        matches!(self, PieceKind::Rook | PieceKind::Queen)
    }

    #[inline]
    #[must_use]
    pub(crate) const fn moves_diagonally(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Queen)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        f.write_str(name)
    }
}

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors (White first)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Back rank for this color (0 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub const fn back_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Pawn forward direction (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Pawn starting rank (1 for White, 6 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A colored piece as stored in a board cell.
///
/// The piece's square is not stored here: the cell holding it is the only
/// record of its position (see [`PlacedPiece`](crate::board::PlacedPiece)).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    has_moved: bool,
}

impl Piece {
    /// A piece that has not moved yet.
    #[must_use]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Piece {
            kind,
            color,
            has_moved: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Whether this piece has completed a move. Only pawns consult it.
    #[inline]
    #[must_use]
    pub const fn has_moved(self) -> bool {
        self.has_moved
    }

    /// True while a pawn may still take its two-square first step.
    #[inline]
    #[must_use]
    pub const fn can_double_step(self) -> bool {
        matches!(self.kind, PieceKind::Pawn) && !self.has_moved
    }

    #[inline]
    #[must_use]
    pub(crate) const fn marked_moved(mut self) -> Self {
        self.has_moved = true;
        self
    }

    /// Unicode chess glyph.
    #[must_use]
    pub const fn symbol(self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::King) => '♔',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::Black, PieceKind::King) => '♚',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Pawn) => '♟',
        }
    }

    /// Letter with case based on color (uppercase for White)
    #[must_use]
    pub fn ascii(self) -> char {
        let c = self.kind.to_char();
        if self.color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_differ_by_color() {
        for kind in PieceKind::ALL {
            let white = Piece::new(Color::White, kind).symbol();
            let black = Piece::new(Color::Black, kind).symbol();
            assert_ne!(white, black, "{kind} glyphs collide");
        }
        assert_eq!(Piece::new(Color::White, PieceKind::King).symbol(), '♔');
        assert_eq!(Piece::new(Color::Black, PieceKind::Pawn).symbol(), '♟');
    }

    #[test]
    fn test_ascii_case_follows_color() {
        assert_eq!(Piece::new(Color::White, PieceKind::Knight).ascii(), 'N');
        assert_eq!(Piece::new(Color::Black, PieceKind::Knight).ascii(), 'n');
    }

    #[test]
    fn test_double_step_only_for_unmoved_pawns() {
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        assert!(pawn.can_double_step());
        assert!(!pawn.marked_moved().can_double_step());
        assert!(!Piece::new(Color::White, PieceKind::Rook).can_double_step());
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Color::White.opponent(), Color::Black);
        assert_eq!(Color::Black.opponent(), Color::White);
    }
}
