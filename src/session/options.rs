//! Console session settings.

use std::fmt;

use crate::board::GlyphSet;

/// Error type for option parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    /// No option with this name
    UnknownOption { name: String },
    /// The option needs a value and none was given
    MissingValue { name: String },
    /// The value does not parse for this option
    InvalidValue { name: String, value: String },
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionError::UnknownOption { name } => write!(f, "Unknown option '{name}'"),
            OptionError::MissingValue { name } => write!(f, "Option '{name}' needs a value"),
            OptionError::InvalidValue { name, value } => {
                write!(f, "Invalid value '{value}' for option '{name}'")
            }
        }
    }
}

impl std::error::Error for OptionError {}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Play(SessionOptions),
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    pub glyphs: GlyphSet,
    pub coordinates: bool,
    pub clear_lines: usize,
    pub hints: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions {
            glyphs: GlyphSet::Unicode,
            coordinates: true,
            clear_lines: 50,
            hints: false,
        }
    }
}

fn parse_flag(name: &str, value: Option<&str>) -> Result<bool, OptionError> {
    // A bare flag switches the option on.
    let Some(v) = value else {
        return Ok(true);
    };
    match v.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Ok(true),
        "false" | "0" | "off" | "no" => Ok(false),
        _ => Err(OptionError::InvalidValue {
            name: name.to_string(),
            value: v.to_string(),
        }),
    }
}

impl SessionOptions {
    /// Option names and descriptions, in `--help` order.
    pub const HELP: [(&'static str, &'static str); 4] = [
        ("glyphs", "unicode|ascii, piece and square characters (default unicode)"),
        ("coordinates", "true|false, label files and ranks (default true)"),
        ("clear-lines", "blank lines printed between turns (default 50)"),
        ("hints", "true|false, list legal targets after picking a piece (default false)"),
    ];

    /// Set one option by name. Names are case-insensitive and treat `-`, `_`
    /// and spaces alike.
    pub fn apply_setoption(&mut self, name: &str, value: Option<&str>) -> Result<(), OptionError> {
        let normalized: String = name
            .trim()
            .chars()
            .map(|c| match c {
                '_' | ' ' => '-',
                c => c.to_ascii_lowercase(),
            })
            .collect();
        let invalid = |v: &str| OptionError::InvalidValue {
            name: normalized.clone(),
            value: v.to_string(),
        };

        match normalized.as_str() {
            "glyphs" => {
                let v = value.ok_or_else(|| OptionError::MissingValue {
                    name: normalized.clone(),
                })?;
                self.glyphs = v.parse().map_err(|_| invalid(v))?;
            }
            "coordinates" => self.coordinates = parse_flag(&normalized, value)?,
            "hints" => self.hints = parse_flag(&normalized, value)?,
            "clear-lines" => {
                let v = value.ok_or_else(|| OptionError::MissingValue {
                    name: normalized.clone(),
                })?;
                self.clear_lines = v.trim().parse::<usize>().map_err(|_| invalid(v))?;
            }
            _ => {
                return Err(OptionError::UnknownOption {
                    name: normalized.clone(),
                })
            }
        }
        Ok(())
    }

    /// Parse `--name=value`, `--name value` and bare `--flag` arguments,
    /// program name already stripped.
    pub fn from_args<I, S>(args: I) -> Result<Invocation, OptionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|a| a.as_ref().to_string()).collect();
        let mut options = SessionOptions::default();
        let mut i = 0;

        while i < args.len() {
            let arg = args[i].as_str();
            let Some(body) = arg.strip_prefix("--") else {
                return Err(OptionError::UnknownOption {
                    name: arg.to_string(),
                });
            };
            if body == "help" {
                return Ok(Invocation::Help);
            }

            if let Some((name, value)) = body.split_once('=') {
                options.apply_setoption(name, Some(value))?;
            } else if let Some(next) = args.get(i + 1).filter(|n| !n.starts_with("--")) {
                options.apply_setoption(body, Some(next.as_str()))?;
                i += 1;
            } else {
                options.apply_setoption(body, None)?;
            }
            i += 1;
        }

        Ok(Invocation::Play(options))
    }

    /// Usage text for `--help`.
    #[must_use]
    pub fn usage() -> String {
        let mut text = String::from("usage: console_chess [--option[=value]]...\n\noptions:\n");
        for (name, description) in Self::HELP {
            text.push_str(&format!("  --{name:<12} {description}\n"));
        }
        text
    }
}
