//! Text rendering of the board.

use std::fmt::{self, Write};
use std::str::FromStr;

use super::{Board, Piece, Square, BOARD_SIZE};

/// Character set used to draw pieces and empty squares.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GlyphSet {
    /// Chess glyphs, `□`/`■` checkerboard
    #[default]
    Unicode,
    /// `KQRBNP`/`kqrbnp`, `.`/`:` checkerboard
    Ascii,
}

impl GlyphSet {
    #[must_use]
    pub fn piece(self, piece: Piece) -> char {
        match self {
            GlyphSet::Unicode => piece.symbol(),
            GlyphSet::Ascii => piece.ascii(),
        }
    }

    #[must_use]
    pub const fn empty(self, sq: Square) -> char {
        match (self, sq.is_light()) {
            (GlyphSet::Unicode, true) => '□',
            (GlyphSet::Unicode, false) => '■',
            (GlyphSet::Ascii, true) => '.',
            (GlyphSet::Ascii, false) => ':',
        }
    }
}

impl FromStr for GlyphSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unicode" => Ok(GlyphSet::Unicode),
            "ascii" => Ok(GlyphSet::Ascii),
            other => Err(other.to_string()),
        }
    }
}

const FILE_LABELS: &str = "  a b c d e f g h";

impl Board {
    /// Draws the board with rank 8 at the top, one line per rank.
    #[must_use]
    pub fn render(&self, glyphs: GlyphSet, coordinates: bool) -> String {
        Grid {
            board: self,
            glyphs,
            coordinates,
        }
        .to_string()
    }

    fn write_grid<W: Write>(&self, out: &mut W, glyphs: GlyphSet, coordinates: bool) -> fmt::Result {
        if coordinates {
            writeln!(out, "{FILE_LABELS}")?;
        }
        for y in (0..BOARD_SIZE).rev() {
            if coordinates {
                write!(out, "{} ", y + 1)?;
            }
            for x in 0..BOARD_SIZE {
                let Some(sq) = Square::new(x, y) else {
                    continue;
                };
                let c = match self.get(sq) {
                    Some(piece) => glyphs.piece(piece),
                    None => glyphs.empty(sq),
                };
                if x > 0 {
                    out.write_char(' ')?;
                }
                out.write_char(c)?;
            }
            if coordinates {
                write!(out, " {}", y + 1)?;
            }
            writeln!(out)?;
        }
        if coordinates {
            writeln!(out, "{FILE_LABELS}")?;
        }
        Ok(())
    }
}

struct Grid<'a> {
    board: &'a Board,
    glyphs: GlyphSet,
    coordinates: bool,
}

impl fmt::Display for Grid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.board.write_grid(f, self.glyphs, self.coordinates)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_grid(f, GlyphSet::Unicode, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardBuilder;

    #[test]
    fn test_starting_position_ascii() {
        let text = Board::new().render(GlyphSet::Ascii, false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "r n b q k b n r");
        assert_eq!(lines[1], "p p p p p p p p");
        assert_eq!(lines[2], ": . : . : . : .");
        assert_eq!(lines[3], ". : . : . : . :");
        assert_eq!(lines[6], "P P P P P P P P");
        assert_eq!(lines[7], "R N B Q K B N R");
    }

    #[test]
    fn test_unicode_with_coordinates() {
        let text = Board::new().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], FILE_LABELS);
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
        assert_eq!(lines[9], FILE_LABELS);
    }

    #[test]
    fn test_empty_squares_checkerboard() {
        let text = BoardBuilder::new().build().render(GlyphSet::Unicode, false);
        let lines: Vec<&str> = text.lines().collect();
        // Bottom line is rank 1 and a1 is hollow.
        assert!(lines[7].starts_with("□ ■ □"));
        assert!(lines[6].starts_with('■'));
        assert_eq!(GlyphSet::Unicode.empty(Square::new(0, 0).unwrap()), '□');
        assert_eq!(GlyphSet::Ascii.empty(Square::new(0, 0).unwrap()), '.');
    }

    #[test]
    fn test_glyph_set_parse() {
        assert_eq!("ASCII".parse::<GlyphSet>(), Ok(GlyphSet::Ascii));
        assert_eq!("unicode".parse::<GlyphSet>(), Ok(GlyphSet::Unicode));
        assert!("emoji".parse::<GlyphSet>().is_err());
    }
}
