//! Core game logic: board representation, players, and the round state
//! machine driven by column drops.

mod board;
mod display;
mod player;
mod round;

pub use board::{Board, BoardPosition, AXES, DEFAULT_COLUMNS, DEFAULT_ROWS};
pub use player::{CheckerColor, Player, PlayerId};
pub use round::{Round, RoundState, DEFAULT_WIN_LENGTH};
