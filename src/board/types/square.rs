//! Square type and algebraic notation.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Number of files and ranks.
pub const BOARD_SIZE: usize = 8;

/// A square on the board, always in range.
///
/// `x` is the file (0 = a), `y` the rank (0 = rank 1, White's back rank).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(usize, usize)", into = "(usize, usize)"))]
pub struct Square {
    x: u8,
    y: u8,
}

impl Square {
    /// Create a square with bounds checking
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Option<Self> {
        if x < BOARD_SIZE && y < BOARD_SIZE {
            Some(Square {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    /// File index (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn x(self) -> usize {
        self.x as usize
    }

    /// Rank index (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn y(self) -> usize {
        self.y as usize
    }

    /// Get the square's index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.y() * BOARD_SIZE + self.x()
    }

    /// Create a square from an index (0-63)
    #[must_use]
    pub const fn from_index(idx: usize) -> Option<Self> {
        Square::new(idx % BOARD_SIZE, idx / BOARD_SIZE)
    }

    /// The square displaced by `(dx, dy)`, if it stays on the board.
    #[must_use]
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        let x = usize::try_from(i16::from(self.x) + i16::from(dx)).ok()?;
        let y = usize::try_from(i16::from(self.y) + i16::from(dy)).ok()?;
        Square::new(x, y)
    }

    /// Signed displacement `(dx, dy)` from `self` to `to`.
    #[inline]
    #[must_use]
    pub(crate) fn delta(self, to: Square) -> (i8, i8) {
        (to.x as i8 - self.x as i8, to.y as i8 - self.y as i8)
    }

    /// Even-parity squares get the hollow glyph when rendering (a1 included).
    #[inline]
    #[must_use]
    pub const fn is_light(self) -> bool {
        (self.x + self.y) % 2 == 0
    }

    /// All 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE * BOARD_SIZE).filter_map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.x + b'a') as char, self.y + 1)
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_index().cmp(&other.as_index())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((x, y): (usize, usize)) -> Result<Self, Self::Error> {
        if x >= BOARD_SIZE {
            return Err(SquareError::FileOutOfBounds { file: x });
        }
        if y >= BOARD_SIZE {
            return Err(SquareError::RankOutOfBounds { rank: y });
        }
        Ok(Square {
            x: x as u8,
            y: y as u8,
        })
    }
}

impl From<Square> for (usize, usize) {
    fn from(sq: Square) -> Self {
        (sq.x(), sq.y())
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let lowered = s.trim().to_ascii_lowercase();
        let chars: Vec<char> = lowered.chars().collect();
        if chars.len() != 2 {
            return Err(invalid());
        }

        let x = match chars[0] {
            'a'..='h' => chars[0] as usize - 'a' as usize,
            _ => return Err(invalid()),
        };
        let y = match chars[1] {
            '1'..='8' => chars[1] as usize - '1' as usize,
            _ => return Err(invalid()),
        };

        Square::try_from((x, y))
    }
}
