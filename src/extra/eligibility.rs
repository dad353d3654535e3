//! Per-day eligibility for `1T`/`7`.

use crate::code::{ShiftCode, EXCLUSIVE, EXTRA, HARD_AFTER, HARD_BEFORE, SOFT_BEFORE};
use crate::decision::{DayGate, Rejection, SoftSignal, WorkerVerdict};
use crate::grid::RosterGrid;

use super::config::ExtraConfig;

/// Read-only eligibility checks over a grid.
pub struct ExtraFilter<'a, G: ?Sized> {
    grid: &'a G,
    config: &'a ExtraConfig,
}

impl<'a, G: RosterGrid + ?Sized> ExtraFilter<'a, G> {
    pub fn new(grid: &'a G, config: &'a ExtraConfig) -> Self {
        Self { grid, config }
    }

    /// Day-level gate: an exclusive code anywhere on the day.
    pub fn day_gate(&self, col: usize) -> Option<DayGate> {
        self.grid
            .day_holds_any(col, EXCLUSIVE)
            .map(|(row, code)| DayGate::DayGated { code, row })
    }

    /// Checks one worker, returning their row or the first rejection.
    ///
    /// Rules are applied in order: missing row, occupied cell, yesterday,
    /// tomorrow, capacity.
    pub fn check(&self, worker: &str, col: usize, target: ShiftCode) -> Result<usize, Rejection> {
        let row = self.grid.worker_row(worker).ok_or(Rejection::WorkerMissing)?;
        if let Some(value) = self.grid.cell(row, col) {
            return Err(Rejection::Occupied {
                value: value.to_string(),
            });
        }
        if let Some(code) = self.hard_yesterday(row, col) {
            return Err(Rejection::HardConstraintYesterday { code });
        }
        if let Some(code) = self.hard_tomorrow(row, col) {
            return Err(Rejection::HardConstraintTomorrow { code });
        }
        if let Some(rejection) = self.capacity(worker, col, target) {
            return Err(rejection);
        }
        Ok(row)
    }

    /// Eligible workers with their rows, in configured order.
    pub fn eligible(&self, col: usize, target: ShiftCode) -> Vec<(String, usize)> {
        self.config
            .eligible_workers
            .iter()
            .filter_map(|w| self.check(w, col, target).ok().map(|row| (w.clone(), row)))
            .collect()
    }

    /// Every reason and soft signal for one worker.
    ///
    /// A missing row or an occupied cell is reported alone, since nothing
    /// else about that worker matters for the day.
    pub fn explain(&self, worker: &str, col: usize, target: ShiftCode) -> WorkerVerdict {
        let mut verdict = WorkerVerdict {
            worker: worker.to_string(),
            rejections: Vec::new(),
            signals: Vec::new(),
        };
        let Some(row) = self.grid.worker_row(worker) else {
            verdict.rejections.push(Rejection::WorkerMissing);
            return verdict;
        };
        if let Some(value) = self.grid.cell(row, col) {
            verdict.rejections.push(Rejection::Occupied {
                value: value.to_string(),
            });
            return verdict;
        }

        if let Some(code) = self.hard_yesterday(row, col) {
            verdict
                .rejections
                .push(Rejection::HardConstraintYesterday { code });
        }
        if let Some(code) = self.hard_tomorrow(row, col) {
            verdict
                .rejections
                .push(Rejection::HardConstraintTomorrow { code });
        }
        verdict.rejections.extend(self.capacity(worker, col, target));

        let yesterday = self.grid.previous_cell(row, col);
        if let Some(code) = yesterday.and_then(|t| SOFT_BEFORE.matches(t)) {
            verdict
                .signals
                .push(SoftSignal::SoftRestrictionYesterday { code });
        }
        if let Some(code) = yesterday.and_then(|t| EXTRA.matches(t)) {
            verdict.signals.push(SoftSignal::ExtraYesterday { code });
        }
        verdict
    }

    /// Breakdown for every configured worker.
    pub fn explain_all(&self, col: usize, target: ShiftCode) -> Vec<WorkerVerdict> {
        self.config
            .eligible_workers
            .iter()
            .map(|w| self.explain(w, col, target))
            .collect()
    }

    fn hard_yesterday(&self, row: usize, col: usize) -> Option<ShiftCode> {
        self.grid
            .previous_cell(row, col)
            .and_then(|t| HARD_BEFORE.matches(t))
    }

    fn hard_tomorrow(&self, row: usize, col: usize) -> Option<ShiftCode> {
        self.grid.next_cell(row, col).and_then(|t| HARD_AFTER.matches(t))
    }

    /// Tower limit for the restricted worker on `1T` days.
    ///
    /// A missing or non-numeric aggregate never excludes.
    fn capacity(&self, worker: &str, col: usize, target: ShiftCode) -> Option<Rejection> {
        let restricted = self.config.tower_worker.as_deref()?;
        if target != ShiftCode::OneT || !restricted.eq_ignore_ascii_case(worker.trim()) {
            return None;
        }
        let count = self.grid.aggregate(&self.config.tower_label, col)?;
        (count > self.config.tower_threshold).then_some(Rejection::CapacityRestriction {
            count,
            limit: self.config.tower_threshold,
        })
    }
}
