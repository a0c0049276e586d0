use thiserror::Error;

// ---------------------------------------------------------------------------
// ColumnError – asking for a column the table does not have
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColumnError {
    #[error("column {index} is out of range for a table with {columns} column(s)")]
    OutOfRange { index: usize, columns: usize },
}

// ---------------------------------------------------------------------------
// Table – the complete loaded file
// ---------------------------------------------------------------------------

/// A rectangular, row-major table of floats.
///
/// Every row has exactly `n_cols` values. A table with no rows also has no
/// columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    n_cols: usize,
    /// Row-major storage, `n_rows * n_cols` values.
    values: Vec<f64>,
}

impl Table {
    /// Build a table from rows that the caller has already checked to be
    /// rectangular.
    pub(crate) fn from_rows(n_cols: usize, rows: Vec<Vec<f64>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == n_cols));
        let values: Vec<f64> = rows.into_iter().flatten().collect();
        Table { n_cols, values }
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        if self.n_cols == 0 {
            0
        } else {
            self.values.len() / self.n_cols
        }
    }

    /// Number of columns (fields per row).
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // `chunks_exact` panics on 0, and a 0-column table has no values anyway.
        self.values.chunks_exact(self.n_cols.max(1))
    }

    /// Copy out column `j`.
    pub fn column(&self, j: usize) -> Result<Vec<f64>, ColumnError> {
        if j >= self.n_cols {
            return Err(ColumnError::OutOfRange {
                index: j,
                columns: self.n_cols,
            });
        }
        Ok(self.rows().map(|row| row[j]).collect())
    }
}
