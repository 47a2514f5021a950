use serde::{Deserialize, Serialize};

use super::PlayerId;
use crate::error::{DropError, SnapshotError};

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLUMNS: usize = 7;

/// Line directions checked for a win, in tie-break order: horizontal,
/// vertical, diagonal down-right, diagonal down-left.
pub const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// A cell on the board. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BoardPosition {
    pub row: usize,
    pub column: usize,
}

impl BoardPosition {
    pub fn new(row: usize, column: usize) -> Self {
        BoardPosition { row, column }
    }
}

/// Fixed-size grid of optional owners, stored row-major.
///
/// Serializes as a list of rows so the layout reads the same as the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    into = "Vec<Vec<Option<PlayerId>>>",
    try_from = "Vec<Vec<Option<PlayerId>>>"
)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Option<PlayerId>>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: usize, columns: usize) -> Self {
        Board {
            rows,
            columns,
            cells: vec![None; rows * columns],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Owner of the cell at a specific position.
    /// Row 0 is the top, row `rows - 1` is the bottom.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the board.
    pub fn get(&self, row: usize, col: usize) -> Option<&PlayerId> {
        assert!(
            row < self.rows && col < self.columns,
            "position ({row}, {col}) outside {}x{} board",
            self.rows,
            self.columns
        );
        self.cells[row * self.columns + col].as_ref()
    }

    /// Bounds-checked lookup on signed coordinates; `None` when off the board
    /// or empty.
    fn owner_at(&self, row: isize, col: isize) -> Option<&PlayerId> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.rows || col >= self.columns {
            return None;
        }
        self.cells[row * self.columns + col].as_ref()
    }

    /// Row a token dropped in `col` would land on, if the column has room.
    pub fn lowest_empty_row(&self, col: usize) -> Option<usize> {
        if col >= self.columns {
            return None;
        }
        (0..self.rows)
            .rev()
            .find(|&row| self.cells[row * self.columns + col].is_none())
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        self.lowest_empty_row(col).is_none()
    }

    /// Drop a token in a column, returns the cell where it landed
    pub fn drop_piece(&mut self, col: usize, owner: PlayerId) -> Result<BoardPosition, DropError> {
        if col >= self.columns {
            return Err(DropError::InvalidColumn {
                column: col as isize,
                columns: self.columns,
            });
        }

        let row = self
            .lowest_empty_row(col)
            .ok_or(DropError::ColumnFull { column: col })?;
        self.cells[row * self.columns + col] = Some(owner);
        Ok(BoardPosition::new(row, col))
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Consecutive cells sharing the owner of `from`, walking in one direction
    /// and excluding `from` itself.
    fn run(&self, from: BoardPosition, d_row: isize, d_col: isize) -> Vec<BoardPosition> {
        let mut run = Vec::new();
        let Some(owner) = self.owner_at(from.row as isize, from.column as isize) else {
            return run;
        };

        let mut r = from.row as isize + d_row;
        let mut c = from.column as isize + d_col;
        while self.owner_at(r, c) == Some(owner) {
            run.push(BoardPosition::new(r as usize, c as usize));
            r += d_row;
            c += d_col;
        }
        run
    }

    /// Winning line through `last`, if one of at least `win_length` cells exists.
    ///
    /// Axes are tried in [`AXES`] order and the first qualifying one is
    /// returned; lines on different axes are never merged. Cells come out as
    /// the run walked along the axis step as written in [`AXES`] (right, down,
    /// down-right, down-left), then the run walked against it, then `last`.
    pub fn winning_line(&self, last: BoardPosition, win_length: usize) -> Option<Vec<BoardPosition>> {
        self.owner_at(last.row as isize, last.column as isize)?;

        AXES.iter().find_map(|&(d_row, d_col)| {
            let mut line = self.run(last, d_row, d_col);
            line.extend(self.run(last, -d_row, -d_col));
            line.push(last);
            (line.len() >= win_length).then_some(line)
        })
    }

    /// Check if the token at `last` completes a line of `win_length`
    pub fn check_win(&self, last: BoardPosition, win_length: usize) -> bool {
        self.winning_line(last, win_length).is_some()
    }

    /// Rows from top to bottom. A zero-width board still yields `rows` empty rows.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Option<PlayerId>]> {
        (0..self.rows).map(move |row| {
            let start = row * self.columns;
            &self.cells[start..start + self.columns]
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLUMNS)
    }
}

impl From<Board> for Vec<Vec<Option<PlayerId>>> {
    fn from(board: Board) -> Self {
        board.iter_rows().map(<[_]>::to_vec).collect()
    }
}

impl TryFrom<Vec<Vec<Option<PlayerId>>>> for Board {
    type Error = SnapshotError;

    fn try_from(rows: Vec<Vec<Option<PlayerId>>>) -> Result<Self, Self::Error> {
        let columns = rows.first().map_or(0, Vec::len);
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != columns {
                return Err(SnapshotError::RaggedBoard {
                    row,
                    found: cells.len(),
                    expected: columns,
                });
            }
        }

        Ok(Board {
            rows: rows.len(),
            columns,
            cells: rows.into_iter().flatten().collect(),
        })
    }
}
