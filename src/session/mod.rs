//! Interactive console session.
//!
//! Reads coordinates in algebraic notation, one per line, and drives a
//! [`Game`] until a king falls. Generic over the reader and writer so the
//! same loop serves stdin/stdout and in-memory buffers.

use std::fmt;
use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::board::Square;
use crate::game::Game;

pub mod options;

pub use options::{Invocation, OptionError, SessionOptions};

pub const READY_PROMPT: &str = "Ready for a game? y/n";
pub const PIECE_PROMPT: &str = "Please enter the piece to move.";
pub const TARGET_PROMPT: &str = "Please enter the place to move.";
pub const COORDINATE_PROMPT: &str = "Enter chess coordinates (e.g., e2, h5): ";
pub const INVALID_INPUT: &str = "Invalid input. Please enter a valid chess coordinate.";
pub const MOVE_REJECTED: &str = "Could not make move, please enter a new move.";

/// Error type for session failures
#[derive(Debug)]
pub enum SessionError {
    /// Reading input or writing output failed
    Io(io::Error),
    /// Bad command-line option
    Options(OptionError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Io(e) => write!(f, "I/O error: {e}"),
            SessionError::Options(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Io(e) => Some(e),
            SessionError::Options(e) => Some(e),
        }
    }
}

impl From<io::Error> for SessionError {
    fn from(e: io::Error) -> Self {
        SessionError::Io(e)
    }
}

impl From<OptionError> for SessionError {
    fn from(e: OptionError) -> Self {
        SessionError::Options(e)
    }
}

/// How a single game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GameEnd {
    Finished,
    InputClosed,
}

pub struct Session<R, W> {
    input: R,
    output: W,
    options: SessionOptions,
    games_played: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, options: SessionOptions) -> Self {
        Session {
            input,
            output,
            options,
            games_played: 0,
        }
    }

    /// Number of games played to the end.
    #[must_use]
    pub fn games_played(&self) -> usize {
        self.games_played
    }

    /// Offer games until the player declines or input runs out.
    pub fn run(&mut self) -> Result<(), SessionError> {
        loop {
            writeln!(self.output, "{READY_PROMPT}")?;
            self.output.flush()?;

            let Some(answer) = self.read_line()? else {
                return Ok(());
            };
            if !answer.trim().eq_ignore_ascii_case("y") {
                debug!("player declined a new game");
                return Ok(());
            }

            if self.play_game()? == GameEnd::InputClosed {
                return Ok(());
            }
            self.games_played += 1;
        }
    }

    fn play_game(&mut self) -> Result<GameEnd, SessionError> {
        let mut game = Game::new();
        info!("new game started");

        while !game.is_finished() {
            self.render(&game)?;
            writeln!(self.output, "{} to move.", game.turn())?;

            writeln!(self.output, "{PIECE_PROMPT}")?;
            let Some(from) = self.ask_square()? else {
                return Ok(GameEnd::InputClosed);
            };
            if self.options.hints {
                self.show_hints(&game, from)?;
            }

            writeln!(self.output, "{TARGET_PROMPT}")?;
            let Some(to) = self.ask_square()? else {
                return Ok(GameEnd::InputClosed);
            };

            self.clear()?;
            if let Err(err) = game.try_move(from, to) {
                debug!("{from}-{to} rejected: {err}");
                writeln!(self.output, "{MOVE_REJECTED}")?;
            }
        }

        self.render(&game)?;
        match game.winner() {
            Some(winner) => writeln!(self.output, "Game over. {winner} wins.")?,
            None => writeln!(self.output, "Game over.")?,
        }
        Ok(GameEnd::Finished)
    }

    /// Prompt until a valid square is entered. `None` on end of input.
    fn ask_square(&mut self) -> Result<Option<Square>, SessionError> {
        loop {
            write!(self.output, "{COORDINATE_PROMPT}")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.parse::<Square>() {
                Ok(sq) => return Ok(Some(sq)),
                Err(err) => {
                    debug!("{err}");
                    writeln!(self.output, "{INVALID_INPUT}")?;
                }
            }
        }
    }

    fn show_hints(&mut self, game: &Game, from: Square) -> Result<(), SessionError> {
        if game.board().color_on(from) != Some(game.turn()) {
            return Ok(());
        }
        let targets = game.board().legal_targets(from);
        if targets.is_empty() {
            writeln!(self.output, "No legal moves from {from}.")?;
        } else {
            let list: Vec<String> = targets.iter().map(Square::to_string).collect();
            writeln!(self.output, "Legal moves from {from}: {}", list.join(" "))?;
        }
        Ok(())
    }

    fn render(&mut self, game: &Game) -> Result<(), SessionError> {
        let text = game
            .board()
            .render(self.options.glyphs, self.options.coordinates);
        write!(self.output, "{text}")?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SessionError> {
        for _ in 0..self.options.clear_lines {
            writeln!(self.output)?;
        }
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>, SessionError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
