//! Core trait for roster grids.

use std::ops::RangeInclusive;

use crate::code::{CodeSet, ShiftCode};

/// Column of the first day; column 1 holds worker identifiers.
pub const FIRST_DAY_COLUMN: usize = 2;

/// Cell-level access to a roster.
///
/// Implementors provide raw cell access and the band of rows holding
/// workers; every lookup the engines need is derived from those.
///
/// Indices are 1-based. Reads outside the grid return `None`.
pub trait RosterGrid {
    /// Number of rows in use.
    fn max_row(&self) -> usize;

    /// Number of columns in use.
    fn max_column(&self) -> usize;

    /// Returns the trimmed cell text, or `None` when the cell is blank.
    fn cell(&self, row: usize, col: usize) -> Option<&str>;

    /// Overwrites a cell, growing the grid if needed.
    fn set_cell(&mut self, row: usize, col: usize, value: &str);

    /// Rows that hold workers (column 1 is the worker identifier).
    fn worker_rows(&self) -> RangeInclusive<usize>;

    /// Parses the cell as a [`ShiftCode`].
    fn code(&self, row: usize, col: usize) -> Option<ShiftCode> {
        self.cell(row, col).and_then(ShiftCode::parse)
    }

    fn is_blank(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_none()
    }

    /// Finds the row of a worker by identifier, ignoring case.
    fn worker_row(&self, worker: &str) -> Option<usize> {
        let worker = worker.trim();
        self.worker_rows()
            .find(|&row| matches!(self.cell(row, 1), Some(id) if id.eq_ignore_ascii_case(worker)))
    }

    /// Identifiers of every worker row, upper-cased, in row order.
    fn workers(&self) -> Vec<(usize, String)> {
        self.worker_rows()
            .filter_map(|row| self.cell(row, 1).map(|id| (row, id.to_uppercase())))
            .collect()
    }

    /// Finds a labelled row anywhere in column 1, ignoring case.
    fn label_row(&self, label: &str) -> Option<usize> {
        let label = label.trim();
        (1..=self.max_row())
            .find(|&row| matches!(self.cell(row, 1), Some(text) if text.eq_ignore_ascii_case(label)))
    }

    /// Reads an integer from a labelled aggregate row.
    ///
    /// Returns `None` when the row is missing or the cell is not numeric.
    /// Whole-valued decimals such as `"9.0"` are accepted.
    fn aggregate(&self, label: &str, col: usize) -> Option<i64> {
        let row = self.label_row(label)?;
        let text = self.cell(row, col)?;
        text.parse::<i64>().ok().or_else(|| {
            text.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && v.fract() == 0.0)
                .map(|v| v as i64)
        })
    }

    /// Header text of a day column, or a positional fallback.
    fn day_label(&self, col: usize) -> String {
        match self.cell(1, col) {
            Some(label) => label.to_string(),
            None => format!("Column {col}"),
        }
    }

    /// Day columns in processing order.
    fn day_columns(&self) -> RangeInclusive<usize> {
        FIRST_DAY_COLUMN..=self.max_column()
    }

    /// First worker on the day holding a code from `set`.
    fn day_holds_any(&self, col: usize, set: CodeSet) -> Option<(usize, ShiftCode)> {
        self.worker_rows()
            .find_map(|row| self.code(row, col).filter(|c| set.contains(*c)).map(|c| (row, c)))
    }

    /// True when any worker already holds `code` on the day.
    fn day_holds(&self, col: usize, code: ShiftCode) -> bool {
        self.worker_rows().any(|row| self.code(row, col) == Some(code))
    }

    /// Yesterday's cell for a worker row; `None` on the first day column.
    fn previous_cell(&self, row: usize, col: usize) -> Option<&str> {
        if col <= FIRST_DAY_COLUMN {
            return None;
        }
        self.cell(row, col - 1)
    }

    /// Tomorrow's cell for a worker row; `None` past the last column.
    fn next_cell(&self, row: usize, col: usize) -> Option<&str> {
        if col + 1 > self.max_column() {
            return None;
        }
        self.cell(row, col + 1)
    }
}
