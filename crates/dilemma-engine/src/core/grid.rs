use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::strategy::Strategy;
use crate::GridError;

/// A single agent: its current strategy and the score accumulated in the
/// round being played.
///
/// The score is round-local scratch:
/// [`update_scores`](crate::engine::update_scores) rewrites it from zero
/// every round, and it is only meaningful until the following strategy
/// update consumes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub(crate) strategy: Strategy,
    pub(crate) score: f64,
}

impl Cell {
    fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            score: 0.0,
        }
    }

    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    #[must_use]
    pub fn score(&self) -> f64 {
        self.score
    }
}

/// The rectangular playing field: an R x C array of cells, R,C >= 1.
///
/// Cells are stored in one flattened row-major vector and addressed by
/// explicit (row, col) index; the vector itself is never exposed. The
/// dimensions are fixed for the lifetime of the grid and every row has
/// exactly [`cols`](Self::cols) cells.
///
/// Serialization keeps only the strategy layout, one string of symbols per
/// row (e.g. `["CCD", "DCC"]`); scores are scratch data and come back as
/// zero after a round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid from rows of `'C'`/`'D'` symbols.
    ///
    /// Rejects an empty grid, ragged rows, and unrecognized symbols; a
    /// malformed description never produces a grid.
    pub fn from_symbol_rows<S>(rows: &[S]) -> Result<Self, GridError>
    where
        S: AsRef<str>,
    {
        let Some(first) = rows.first() else {
            return Err(GridError::Empty);
        };
        let cols = first.as_ref().chars().count();
        if cols == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row_index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let actual = row.chars().count();
            if actual != cols {
                return Err(GridError::RaggedRow {
                    row: row_index,
                    expected: cols,
                    actual,
                });
            }
            for (col_index, symbol) in row.chars().enumerate() {
                let strategy = Strategy::from_char(symbol).ok_or(GridError::UnknownSymbol {
                    row: row_index,
                    col: col_index,
                    symbol,
                })?;
                cells.push(Cell::new(strategy));
            }
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The cell at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the grid.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} grid",
            self.rows,
            self.cols,
        );
        &self.cells[row * self.cols + col]
    }

    pub(crate) fn set_score(&mut self, row: usize, col: usize, score: f64) {
        let index = row * self.cols + col;
        self.cells[index].score = score;
    }

    /// Replaces every cell's strategy in a single commit.
    ///
    /// `staged` holds the next generation in row-major order, one entry per
    /// cell.
    pub(crate) fn commit_strategies(&mut self, staged: &[Strategy]) {
        debug_assert_eq!(staged.len(), self.cells.len());
        for (cell, &strategy) in self.cells.iter_mut().zip(staged) {
            cell.strategy = strategy;
        }
    }

    /// In-grid positions of the 3x3 Moore neighborhood of (row, col),
    /// including (row, col) itself, in row-major scan order.
    ///
    /// Neighbors outside the grid are skipped, so edge and corner cells see
    /// smaller neighborhoods; there is no wraparound. The strategy update's
    /// tie-break depends on this scan order staying fixed.
    pub fn moore_neighborhood(
        &self,
        row: usize,
        col: usize,
    ) -> impl Iterator<Item = (usize, usize)> {
        let row_range = row.saturating_sub(1)..=(row + 1).min(self.rows - 1);
        let col_range = col.saturating_sub(1)..=(col + 1).min(self.cols - 1);
        row_range.flat_map(move |r| col_range.clone().map(move |c| (r, c)))
    }

    /// Rows of the grid rendered back to their `'C'`/`'D'` symbols.
    pub fn symbol_rows(&self) -> impl Iterator<Item = String> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|cell| cell.strategy.as_char()).collect())
    }
}

impl Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.symbol_rows())
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows = Vec::<String>::deserialize(deserializer)?;
        Grid::from_symbol_rows(&rows).map_err(serde::de::Error::custom)
    }
}
