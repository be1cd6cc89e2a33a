//! Error types for the tile engine.

use thiserror::Error;

/// A command line that could not be turned into a [`Command`](crate::domain::Command).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line contained no command keyword.
    #[error("empty command")]
    Empty,

    /// The first word is not a known command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Tile type names are lowercase: constant, rainbow, mono, immigration, quad.
    #[error("unknown tile type: {0}")]
    UnknownTileType(String),

    /// No shape with this name exists for `setShape`.
    #[error("unknown shape: {0}")]
    UnknownShape(String),

    /// No copycat pattern with this name exists for `setCopycats`.
    #[error("unknown copycat pattern: {0}")]
    UnknownCopycatPattern(String),

    /// A numeric field was not a plain decimal integer in range.
    #[error("invalid {field}: {value:?}")]
    InvalidNumber {
        /// Name of the field being parsed.
        field: &'static str,
        /// Raw text of the field.
        value: String,
    },

    /// A required argument was not supplied.
    #[error("{command}: missing {field}")]
    MissingArgument {
        /// Command keyword.
        command: String,
        /// Name of the missing field.
        field: &'static str,
    },

    /// More arguments were supplied than the command accepts.
    #[error("{command}: unexpected argument {value:?}")]
    UnexpectedArgument {
        /// Command keyword.
        command: String,
        /// The first surplus word.
        value: String,
    },
}

/// Errors raised by grid access, command processing and evolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Row or column outside the grid.
    #[error("position ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        /// Requested row.
        row: i64,
        /// Requested column.
        col: i64,
        /// Grid rows.
        rows: usize,
        /// Grid columns.
        cols: usize,
    },

    /// The command was rejected before touching the grid.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Grids need at least one row and one column.
    #[error("invalid grid dimensions {rows}x{cols}")]
    InvalidDimensions {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
    },

    /// A birth vote tied at one vote each without exactly one unrepresented palette color.
    #[error("majority vote has no unique unrepresented color (votes {votes:?})")]
    UnresolvedTie {
        /// Votes per palette entry, in palette order.
        votes: Vec<u8>,
    },

    /// A tile at the largest representable age cannot grow one generation older.
    #[error("tile age {age} cannot advance another generation")]
    AgeOverflow {
        /// Age of the tile that could not advance.
        age: u64,
    },

    /// A copycat would follow a copycat, or follow itself.
    #[error("copycat leader at ({row}, {col}) is itself a copycat")]
    CopycatChain {
        /// Leader row.
        row: usize,
        /// Leader column.
        col: usize,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
