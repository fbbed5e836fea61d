//! Error types for board operations.

use std::fmt;

use super::{Color, PieceKind, Square};

/// Error type for square parsing and construction failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Why a move request was rejected.
///
/// The boolean entry points (`Game::move_piece`, `Board::make_move`) collapse
/// every variant to `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// A raw coordinate was outside the board
    OffBoard,
    /// No piece on the source square
    EmptySource { from: Square },
    /// The source piece belongs to the side not on move
    NotYourTurn { turn: Color },
    /// Source and destination are the same square
    SameSquare,
    /// Destination holds a piece of the mover's color
    FriendlyFire { target: Square },
    /// The displacement is not one this kind can make
    IllegalGeometry { kind: PieceKind },
    /// A sliding piece's path is obstructed
    PathBlocked { at: Square },
    /// Not a forward step, first-move double step or diagonal capture
    IllegalPawnMove,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OffBoard => write!(f, "Coordinate is off the board"),
            MoveError::EmptySource { from } => write!(f, "No piece on {from}"),
            MoveError::NotYourTurn { turn } => write!(f, "It is {turn}'s turn"),
            MoveError::SameSquare => write!(f, "Source and destination are the same"),
            MoveError::FriendlyFire { target } => {
                write!(f, "Destination {target} holds a friendly piece")
            }
            MoveError::IllegalGeometry { kind } => write!(f, "A {kind} cannot move that way"),
            MoveError::PathBlocked { at } => write!(f, "Path is blocked at {at}"),
            MoveError::IllegalPawnMove => write!(f, "Illegal pawn move"),
        }
    }
}

impl std::error::Error for MoveError {}
