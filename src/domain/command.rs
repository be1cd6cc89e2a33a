//! The line-oriented command vocabulary.
//!
//! One command per logical line, fields separated by whitespace. Parsing never
//! touches the grid, so a rejected line leaves the world unchanged.

use std::str::{FromStr, SplitWhitespace};

use super::{CopycatPattern, Shape, TileKind};
use crate::error::ParseError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `set <row> <col> <tileType> <age>`
    Set { row: i64, col: i64, kind: TileKind, age: u64 },
    /// `fill <tileType> <age>`
    Fill { kind: TileKind, age: u64 },
    /// `setShape <row> <col> <shapeName>`
    SetShape { row: i64, col: i64, shape: Shape },
    /// `setCopycats <patternName>`
    SetCopycats { pattern: CopycatPattern },
    /// `evolve <numSteps> [<secondary>]`
    ///
    /// The secondary field has no known meaning; callers always send 1. It is
    /// parsed and carried along but never acted upon.
    Evolve { steps: u64, secondary: u64 },
    /// `quit`
    Quit,
}

impl Command {
    pub const fn keyword(&self) -> &'static str {
        match self {
            Command::Set { .. } => "set",
            Command::Fill { .. } => "fill",
            Command::SetShape { .. } => "setShape",
            Command::SetCopycats { .. } => "setCopycats",
            Command::Evolve { .. } => "evolve",
            Command::Quit => "quit",
        }
    }
}

/// Cursor over the argument words of one command
struct Args<'a> {
    command: &'a str,
    words: SplitWhitespace<'a>,
}

impl<'a> Args<'a> {
    fn next(&mut self, field: &'static str) -> Result<&'a str, ParseError> {
        self.words.next().ok_or_else(|| ParseError::MissingArgument {
            command: self.command.to_owned(),
            field,
        })
    }

    fn number<T: FromStr>(&mut self, field: &'static str) -> Result<T, ParseError> {
        let word = self.next(field)?;
        parse_number(field, word)
    }

    fn parsed<T: FromStr<Err = ParseError>>(&mut self, field: &'static str) -> Result<T, ParseError> {
        self.next(field)?.parse()
    }

    fn optional_number<T: FromStr>(&mut self, field: &'static str, default: T) -> Result<T, ParseError> {
        match self.words.next() {
            Some(word) => parse_number(field, word),
            None => Ok(default),
        }
    }

    fn finish(mut self) -> Result<(), ParseError> {
        match self.words.next() {
            Some(extra) => Err(ParseError::UnexpectedArgument {
                command: self.command.to_owned(),
                value: extra.to_owned(),
            }),
            None => Ok(()),
        }
    }
}

/// Plain decimal integers only: an optional minus sign and ASCII digits
fn parse_number<T: FromStr>(field: &'static str, word: &str) -> Result<T, ParseError> {
    let digits = word.strip_prefix('-').unwrap_or(word);
    let invalid = || ParseError::InvalidNumber {
        field,
        value: word.to_owned(),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    word.parse().map_err(|_| invalid())
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let keyword = words.next().ok_or(ParseError::Empty)?;

        let mut args = Args { command: keyword, words };

        let parsed = match keyword {
            "set" => Command::Set {
                row: args.number("row")?,
                col: args.number("col")?,
                kind: args.parsed("tile type")?,
                age: args.number("age")?,
            },
            "fill" => Command::Fill {
                kind: args.parsed("tile type")?,
                age: args.number("age")?,
            },
            "setShape" => Command::SetShape {
                row: args.number("row")?,
                col: args.number("col")?,
                shape: args.parsed("shape name")?,
            },
            "setCopycats" => Command::SetCopycats {
                pattern: args.parsed("pattern name")?,
            },
            "evolve" => Command::Evolve {
                steps: args.number("steps")?,
                secondary: args.optional_number("secondary", 1)?,
            },
            "quit" => Command::Quit,
            other => return Err(ParseError::UnknownCommand(other.to_owned())),
        };

        args.finish()?;
        Ok(parsed)
    }
}
