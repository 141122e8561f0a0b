use serde::{Deserialize, Serialize};

use crate::Player;

/// The number of columns markers can be dropped into.
pub const COLUMNS: usize = 7;
/// The number of cells in each column.
pub const ROWS: usize = 6;

/// The contents of one cell: `None` when empty.
pub type Cell = Option<Player>;

/// The playing grid, stored column by column.
///
/// Row 0 is the bottom row. Markers are only ever added through
/// [`Board::drop_marker()`], so the occupied cells of each column always form
/// a contiguous run starting at row 0.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    columns: [[Cell; ROWS]; COLUMNS],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell at the given coordinates, or `None` if they are
    /// outside of the board.
    pub fn get(&self, column: usize, row: usize) -> Option<Cell> {
        self.columns.get(column)?.get(row).copied()
    }

    /// The cells of one column, bottom first.
    ///
    /// Panics if `column >= COLUMNS`.
    pub fn column(&self, column: usize) -> &[Cell; ROWS] {
        &self.columns[column]
    }

    /// Iterates over all columns, left to right.
    pub fn columns(&self) -> impl Iterator<Item = &[Cell; ROWS]> {
        self.columns.iter()
    }

    /// The row a marker dropped into `column` would land in.
    ///
    /// Returns `None` if the column is full or does not exist.
    pub fn lowest_empty_row(&self, column: usize) -> Option<usize> {
        self.columns.get(column)?.iter().position(Option::is_none)
    }

    pub fn is_column_full(&self, column: usize) -> bool {
        self.lowest_empty_row(column).is_none()
    }

    /// Whether every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.columns.iter().flatten().all(Option::is_some)
    }

    /// The number of markers on the board.
    pub fn num_markers(&self) -> usize {
        self.columns.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Places a marker in the lowest empty row of `column` and returns that row.
    ///
    /// Returns `None` without changing anything if the column is full or
    /// does not exist.
    pub(crate) fn drop_marker(&mut self, column: usize, player: Player) -> Option<usize> {
        let row = self.lowest_empty_row(column)?;
        self.columns[column][row] = Some(player);
        Some(row)
    }
}
