use serde::{Deserialize, Serialize};

use crate::error::{BoardError, PlayError};

pub const DEFAULT_COLS: usize = 7;
pub const DEFAULT_ROWS: usize = 6;
/// Largest accepted column or row count. Keeps every column nameable by a
/// single base-36 digit.
pub const MAX_DIMENSION: usize = 36;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

/// Board size as `(columns, rows)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Dimensions {
    pub columns: usize,
    pub rows: usize,
}

impl Dimensions {
    pub fn new(columns: usize, rows: usize) -> Self {
        Dimensions { columns, rows }
    }

    /// Total number of cells on the board.
    pub fn cell_count(&self) -> usize {
        self.columns * self.rows
    }

    /// Check that both dimensions lie in `1..=MAX_DIMENSION`.
    pub fn check(&self) -> Result<(), BoardError> {
        let in_range = |n: usize| (1..=MAX_DIMENSION).contains(&n);
        if in_range(self.columns) && in_range(self.rows) {
            Ok(())
        } else {
            Err(BoardError::InvalidDimensions {
                columns: self.columns,
                rows: self.rows,
            })
        }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Dimensions::new(DEFAULT_COLS, DEFAULT_ROWS)
    }
}

impl From<(usize, usize)> for Dimensions {
    fn from((columns, rows): (usize, usize)) -> Self {
        Dimensions::new(columns, rows)
    }
}

/// A cell address. Row 0 is the top, column 0 is the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Position { row, column }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, column): (usize, usize)) -> Self {
        Position::new(row, column)
    }
}

/// Gravity-drop grid stored as one flat row-major buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    dimensions: Dimensions,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board, rejecting dimensions outside
    /// `1..=MAX_DIMENSION`.
    pub fn try_new(dimensions: Dimensions) -> Result<Self, BoardError> {
        dimensions.check()?;
        Ok(Board {
            dimensions,
            cells: vec![Cell::Empty; dimensions.cell_count()],
        })
    }

    /// Create a new empty board.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero or above [`MAX_DIMENSION`]; use
    /// [`Board::try_new`] for unchecked input.
    pub fn new(dimensions: Dimensions) -> Self {
        match Self::try_new(dimensions) {
            Ok(board) => board,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn columns(&self) -> usize {
        self.dimensions.columns
    }

    pub fn rows(&self) -> usize {
        self.dimensions.rows
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row `rows - 1` is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    pub fn cell(&self, position: Position) -> Cell {
        self.get(position.row, position.column)
    }

    /// Step `distance` cells from `origin` along `(d_row, d_col)`, returning
    /// `None` once the walk leaves the board.
    pub fn offset(
        &self,
        origin: Position,
        d_row: isize,
        d_col: isize,
        distance: usize,
    ) -> Option<Position> {
        let distance = isize::try_from(distance).ok()?;
        let row = origin.row.checked_add_signed(d_row.checked_mul(distance)?)?;
        let column = origin.column.checked_add_signed(d_col.checked_mul(distance)?)?;
        (row < self.rows() && column < self.columns()).then(|| Position::new(row, column))
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.columns() {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Drop a piece in a column, returns the position where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<Position, PlayError> {
        if col >= self.columns() {
            return Err(PlayError::InvalidColumn {
                column: col as isize,
                columns: self.columns(),
            });
        }

        // Find the lowest empty row in this column
        for row in (0..self.rows()).rev() {
            let idx = self.index(row, col);
            if self.cells[idx] == Cell::Empty {
                self.cells[idx] = cell;
                return Ok(Position::new(row, col));
            }
        }

        Err(PlayError::ColumnFull { column: col })
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// Row-major view: one slice per row, top to bottom.
    pub fn row_major(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.columns())
    }

    /// Column-major view: one vector per column, left to right, each listed
    /// from the bottom row upward.
    pub fn column_major(&self) -> Vec<Vec<Cell>> {
        (0..self.columns())
            .map(|col| (0..self.rows()).rev().map(|row| self.get(row, col)).collect())
            .collect()
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.columns() + col
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Dimensions::default())
    }
}
