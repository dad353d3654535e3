//! Availability for simplified shifts.

use std::collections::HashSet;

use crate::code::CONFLICT_MARKERS;
use crate::decision::{DayGate, Rejection, WorkerVerdict};
use crate::grid::RosterGrid;

/// Cells of the worker band that were filled when the run started.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    filled: HashSet<(usize, usize)>,
}

impl Snapshot {
    /// Records every non-blank worker cell on a day column.
    pub fn take<G: RosterGrid + ?Sized>(grid: &G) -> Self {
        let filled = grid
            .worker_rows()
            .flat_map(|row| grid.day_columns().map(move |col| (row, col)))
            .filter(|&(row, col)| !grid.is_blank(row, col))
            .collect();
        Self { filled }
    }

    pub fn was_blank(&self, row: usize, col: usize) -> bool {
        !self.filled.contains(&(row, col))
    }

    /// Number of cells that were filled.
    pub fn len(&self) -> usize {
        self.filled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filled.is_empty()
    }
}

/// Read-only availability checks over a grid and its starting snapshot.
pub struct SimpleFilter<'a, G: ?Sized> {
    grid: &'a G,
    snapshot: &'a Snapshot,
}

impl<'a, G: RosterGrid + ?Sized> SimpleFilter<'a, G> {
    pub fn new(grid: &'a G, snapshot: &'a Snapshot) -> Self {
        Self { grid, snapshot }
    }

    /// Conflict marker anywhere on the day.
    pub fn conflict_marker(&self, col: usize) -> Option<DayGate> {
        self.grid
            .day_holds_any(col, CONFLICT_MARKERS)
            .map(|(row, code)| DayGate::ConflictPresent { code, row })
    }

    /// A worker is available when their cell is blank now and was blank
    /// before the run.
    pub fn check(&self, worker: &str, col: usize) -> Result<usize, Rejection> {
        let row = self.grid.worker_row(worker).ok_or(Rejection::WorkerMissing)?;
        if let Some(value) = self.grid.cell(row, col) {
            return Err(Rejection::Occupied {
                value: value.to_string(),
            });
        }
        if !self.snapshot.was_blank(row, col) {
            return Err(Rejection::PreAssigned);
        }
        Ok(row)
    }

    /// Available members of `pool` with their rows, in pool order.
    ///
    /// A worker listed more than once appears only at its first position.
    pub fn available(&self, pool: &[String], col: usize) -> Vec<(String, usize)> {
        let mut seen = HashSet::new();
        pool.iter()
            .filter_map(|w| self.check(w, col).ok().map(|row| (w.clone(), row)))
            .filter(|(_, row)| seen.insert(*row))
            .collect()
    }

    /// Verdict for every member of `pool`.
    pub fn explain_all(&self, pool: &[String], col: usize) -> Vec<WorkerVerdict> {
        pool.iter()
            .map(|w| WorkerVerdict {
                worker: w.clone(),
                rejections: self.check(w, col).err().into_iter().collect(),
                signals: Vec::new(),
            })
            .collect()
    }
}
