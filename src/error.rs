use std::path::PathBuf;

use crate::game::{CheckerColor, PlayerId};

/// Errors returned by [`Round::drop`](crate::game::Round::drop).
///
/// Both leave the round untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DropError {
    #[error("column {column} is outside the board (0..{columns})")]
    InvalidColumn { column: isize, columns: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },
}

/// Errors raised while rebuilding a board or round from serialized data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("board row {row} has {found} cells, expected {expected}")]
    RaggedBoard {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("board is {found_rows}x{found_columns} but round declares {rows}x{columns}")]
    ShapeMismatch {
        rows: usize,
        columns: usize,
        found_rows: usize,
        found_columns: usize,
    },

    #[error("both players share the id '{0}'")]
    DuplicatePlayerId(PlayerId),

    #[error("both players use {}", .0.name())]
    MatchingColors(CheckerColor),

    #[error("'{0}' is not a player in this round")]
    UnknownPlayer(PlayerId),

    #[error("winning line for '{winner_id}' has {len} cells, needs {win_length} owned cells on the board")]
    InvalidWinningLine {
        winner_id: PlayerId,
        len: usize,
        win_length: usize,
    },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
