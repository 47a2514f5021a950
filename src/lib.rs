//! # Four Straight
//!
//! Round engine for a two-player gravity grid game: players take turns
//! dropping tokens into columns until someone lines up `win_length` tokens or
//! the board fills.
//!
//! ## Modules
//!
//! - [`game`] — Board, players, and the round state machine
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;

pub use config::RoundConfig;
pub use error::{ConfigError, DropError, SnapshotError};
pub use game::{Board, BoardPosition, CheckerColor, Player, PlayerId, Round, RoundState};
