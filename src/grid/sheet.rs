//! Dense in-memory roster grid.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::types::RosterGrid;

/// Inclusive band of rows that hold workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerBand {
    pub first: usize,
    pub last: usize,
}

impl Default for WorkerBand {
    /// Rows 2 through 25, the layout of the monthly roster workbook.
    fn default() -> Self {
        Self { first: 2, last: 25 }
    }
}

/// A roster sheet stored row-major.
///
/// Empty cells are `None`; everything else is kept as written.
///
/// # Examples
///
/// ```
/// use u_rosterfill::grid::{RosterGrid, Sheet};
///
/// let mut sheet = Sheet::from_rows(
///     "March",
///     [
///         vec!["SIGLA", "1", "2"],
///         vec!["GCE", "DESC", ""],
///         vec!["TURNOS OPERATIVOS", "9", "10"],
///     ],
/// )
/// .with_worker_band(2, 2);
///
/// assert_eq!(sheet.worker_row("gce"), Some(2));
/// assert_eq!(sheet.aggregate("turnos operativos", 3), Some(10));
/// sheet.set_cell(2, 3, "1T");
/// assert_eq!(sheet.cell(2, 3), Some("1T"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Sheet {
    pub title: String,
    #[serde(default)]
    worker_band: WorkerBand,
    rows: Vec<Vec<Option<String>>>,
}

impl Sheet {
    /// Creates an empty sheet.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            worker_band: WorkerBand::default(),
            rows: Vec::new(),
        }
    }

    /// Builds a sheet from rows of cell text; empty strings become blank cells.
    pub fn from_rows<R, S>(title: impl Into<String>, rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|text| {
                        let text = text.as_ref();
                        (!text.trim().is_empty()).then(|| text.to_string())
                    })
                    .collect()
            })
            .collect();
        Self {
            title: title.into(),
            worker_band: WorkerBand::default(),
            rows,
        }
    }

    /// Sets the band of rows that hold workers.
    pub fn with_worker_band(mut self, first: usize, last: usize) -> Self {
        self.worker_band = WorkerBand { first, last };
        self
    }

    pub fn worker_band(&self) -> WorkerBand {
        self.worker_band
    }

    /// Clears a cell.
    pub fn clear_cell(&mut self, row: usize, col: usize) {
        if let Some(slot) = self.slot_mut(row, col) {
            *slot = None;
        }
    }

    fn slot_mut(&mut self, row: usize, col: usize) -> Option<&mut Option<String>> {
        self.rows
            .get_mut(row.checked_sub(1)?)?
            .get_mut(col.checked_sub(1)?)
    }
}

impl RosterGrid for Sheet {
    fn max_row(&self) -> usize {
        self.rows.len()
    }

    fn max_column(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row.checked_sub(1)?)?
            .get(col.checked_sub(1)?)?
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    fn set_cell(&mut self, row: usize, col: usize, value: &str) {
        if row == 0 || col == 0 {
            return;
        }
        if self.rows.len() < row {
            self.rows.resize_with(row, Vec::new);
        }
        let cells = &mut self.rows[row - 1];
        if cells.len() < col {
            cells.resize(col, None);
        }
        cells[col - 1] = Some(value.to_string());
    }

    fn worker_rows(&self) -> RangeInclusive<usize> {
        let last = self.worker_band.last.min(self.max_row());
        self.worker_band.first..=last
    }
}
