use std::collections::HashSet;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::board::{DEFAULT_COLUMNS, DEFAULT_ROWS};
use super::{Board, BoardPosition, Player, PlayerId};
use crate::config::RoundConfig;
use crate::error::{DropError, SnapshotError};

pub const DEFAULT_WIN_LENGTH: usize = 4;

/// Where a round stands. `Complete` and `Tie` are terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    WaitingForPlayer {
        id: PlayerId,
    },
    Complete {
        winner_id: PlayerId,
        /// Cells of the winning line; the placed cell is last.
        positions: Vec<BoardPosition>,
    },
    Tie,
}

impl RoundState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RoundState::WaitingForPlayer { .. })
    }
}

/// One round of play between exactly two players.
///
/// The only mutation is [`Round::drop`]; everything else is a read-only view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RoundSnapshot")]
pub struct Round {
    rows: usize,
    columns: usize,
    win_length: usize,
    state: RoundState,
    players: [Player; 2],
    board: Board,
}

/// Unvalidated wire shape of a [`Round`].
#[derive(Deserialize)]
struct RoundSnapshot {
    rows: usize,
    columns: usize,
    win_length: usize,
    state: RoundState,
    players: [Player; 2],
    board: Board,
}

impl TryFrom<RoundSnapshot> for Round {
    type Error = SnapshotError;

    fn try_from(snapshot: RoundSnapshot) -> Result<Self, Self::Error> {
        let RoundSnapshot {
            rows,
            columns,
            win_length,
            state,
            players,
            mut board,
        } = snapshot;

        if players[0].id == players[1].id {
            return Err(SnapshotError::DuplicatePlayerId(players[0].id.clone()));
        }

        if players[1].checker_color != players[0].checker_color.opposite() {
            return Err(SnapshotError::MatchingColors(players[0].checker_color));
        }

        // A board without cells loses its declared width when written as rows
        let declared_empty = rows == 0 || columns == 0;
        if declared_empty && (board.rows() == 0 || board.columns() == 0) {
            board = Board::new(rows, columns);
        }
        if board.rows() != rows || board.columns() != columns {
            return Err(SnapshotError::ShapeMismatch {
                rows,
                columns,
                found_rows: board.rows(),
                found_columns: board.columns(),
            });
        }

        let is_player = |id: &str| players.iter().any(|p| p.id == id);
        match &state {
            RoundState::WaitingForPlayer { id } if !is_player(id) => {
                return Err(SnapshotError::UnknownPlayer(id.clone()));
            }
            RoundState::Complete {
                winner_id,
                positions,
            } => {
                if !is_player(winner_id) {
                    return Err(SnapshotError::UnknownPlayer(winner_id.clone()));
                }
                let owned_by_winner = positions.iter().all(|p| {
                    p.row < rows
                        && p.column < columns
                        && board.get(p.row, p.column) == Some(winner_id)
                });
                if positions.len() < win_length || !owned_by_winner {
                    return Err(SnapshotError::InvalidWinningLine {
                        winner_id: winner_id.clone(),
                        len: positions.len(),
                        win_length,
                    });
                }
            }
            RoundState::WaitingForPlayer { .. } | RoundState::Tie => {}
        }

        Ok(Round {
            rows,
            columns,
            win_length,
            state,
            players,
            board,
        })
    }
}

impl Round {
    /// Start a round on an empty board with `players[0]` to move.
    ///
    /// The second player's color is replaced by the complement of the first's.
    ///
    /// The two player ids must differ: turns are handed over by comparing ids,
    /// so a shared id leaves the second player moving forever. Debug builds
    /// panic on a shared id; release builds do not check.
    pub fn new(rows: usize, columns: usize, win_length: usize, players: [Player; 2]) -> Self {
        let [first, second] = players;
        let second = second.with_checker_color(first.checker_color.opposite());
        debug_assert_ne!(first.id, second.id, "players must have distinct ids");

        Round {
            rows,
            columns,
            win_length,
            state: RoundState::WaitingForPlayer {
                id: first.id.clone(),
            },
            players: [first, second],
            board: Board::new(rows, columns),
        }
    }

    /// Standard 6x7 round, four in a row to win.
    pub fn standard(players: [Player; 2]) -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLUMNS, DEFAULT_WIN_LENGTH, players)
    }

    pub fn from_config(config: &RoundConfig, players: [Player; 2]) -> Self {
        Self::new(config.rows, config.columns, config.win_length, players)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Check if the round is over
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Player whose turn it is, or `None` once the round is over.
    pub fn current_player(&self) -> Option<&Player> {
        match &self.state {
            RoundState::WaitingForPlayer { id } => self.player(id),
            RoundState::Complete { .. } | RoundState::Tie => None,
        }
    }

    pub fn winner(&self) -> Option<&Player> {
        match &self.state {
            RoundState::Complete { winner_id, .. } => self.player(winner_id),
            RoundState::WaitingForPlayer { .. } | RoundState::Tie => None,
        }
    }

    /// Get list of columns that still accept a token
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.columns)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Cells of the winning line, empty unless the round is `Complete`.
    pub fn winning_positions(&self) -> HashSet<BoardPosition> {
        match &self.state {
            RoundState::Complete { positions, .. } => positions.iter().copied().collect(),
            RoundState::WaitingForPlayer { .. } | RoundState::Tie => HashSet::new(),
        }
    }

    /// The board with each owner id resolved to its player.
    pub fn player_filled_board(&self) -> Vec<Vec<Option<&Player>>> {
        self.board
            .iter_rows()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.as_deref().and_then(|id| self.player(id)))
                    .collect()
            })
            .collect()
    }

    /// Drop the current player's token into `column`.
    ///
    /// Returns the cell that received the token, or `Ok(None)` without
    /// touching anything when the round is already over. On error neither the
    /// board nor the state changes.
    pub fn drop(&mut self, column: isize) -> Result<Option<BoardPosition>, DropError> {
        let current_id = match &self.state {
            RoundState::WaitingForPlayer { id } => id.clone(),
            RoundState::Complete { .. } | RoundState::Tie => {
                trace!("drop in column {column} ignored, round is over");
                return Ok(None);
            }
        };

        if column < 0 || column as usize >= self.columns {
            return Err(DropError::InvalidColumn {
                column,
                columns: self.columns,
            });
        }

        let placed = self.board.drop_piece(column as usize, current_id.clone())?;
        debug!(
            "{current_id} dropped into column {column}, landed at row {}",
            placed.row
        );

        self.state = self.next_state(placed, current_id);
        debug!("round state: {}", self.state);

        Ok(Some(placed))
    }

    fn next_state(&self, placed: BoardPosition, mover: PlayerId) -> RoundState {
        if let Some(positions) = self.board.winning_line(placed, self.win_length) {
            RoundState::Complete {
                winner_id: mover,
                positions,
            }
        } else if self.board.is_full() {
            RoundState::Tie
        } else {
            // Exactly two players: hand the turn to whichever one didn't move
            let next = if self.players[0].id == mover {
                &self.players[1]
            } else {
                &self.players[0]
            };
            RoundState::WaitingForPlayer {
                id: next.id.clone(),
            }
        }
    }
}
