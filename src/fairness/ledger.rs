//! Per-worker assignment counters.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::code::ShiftCode;
use crate::grid::RosterGrid;

/// A set of codes balanced through one shared counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FairnessGroup {
    /// Any extra hour: `1T` and `7`.
    AnyExtra,
    /// Six additional hours: `7` only.
    SixHour,
    /// A single-purpose code balanced on its own.
    Own(ShiftCode),
}

impl FairnessGroup {
    /// Groups a code contributes to when committed.
    pub fn contributions(code: ShiftCode) -> Vec<FairnessGroup> {
        match code {
            ShiftCode::OneT => vec![FairnessGroup::AnyExtra],
            ShiftCode::Seven => vec![FairnessGroup::AnyExtra, FairnessGroup::SixHour],
            c if c.is_single_purpose() => vec![FairnessGroup::Own(c)],
            _ => Vec::new(),
        }
    }

    /// Counter minimised first when selecting for `code`.
    pub fn primary(code: ShiftCode) -> Option<FairnessGroup> {
        FairnessGroup::contributions(code).first().copied()
    }

    /// Tie-break counter, only for codes that feed two groups at once.
    pub fn secondary(code: ShiftCode) -> Option<FairnessGroup> {
        FairnessGroup::contributions(code).get(1).copied()
    }
}

/// Assignment counters keyed by worker and group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FairnessLedger {
    counts: HashMap<(String, FairnessGroup), u32>,
}

impl FairnessLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the ledger from every code already present in the grid.
    ///
    /// Scanning the same grid twice yields equal ledgers.
    pub fn scan<G: RosterGrid + ?Sized>(grid: &G) -> Self {
        let mut ledger = Self::new();
        for (row, worker) in grid.workers() {
            for col in grid.day_columns() {
                if let Some(code) = grid.code(row, col) {
                    ledger.record(&worker, code);
                }
            }
        }
        ledger
    }

    /// Adds one assignment of `code` to `worker`.
    pub fn record(&mut self, worker: &str, code: ShiftCode) {
        let worker = normalize(worker);
        for group in FairnessGroup::contributions(code) {
            *self.counts.entry((worker.clone(), group)).or_insert(0) += 1;
        }
    }

    pub fn count(&self, worker: &str, group: FairnessGroup) -> u32 {
        self.counts
            .get(&(normalize(worker), group))
            .copied()
            .unwrap_or(0)
    }

    /// All non-zero counters of one worker.
    pub fn worker_counts(&self, worker: &str) -> BTreeMap<FairnessGroup, u32> {
        let worker = normalize(worker);
        self.counts
            .iter()
            .filter(|((w, _), _)| *w == worker)
            .map(|((_, group), n)| (*group, *n))
            .collect()
    }

    /// Sum of the single-purpose counters of one worker.
    pub fn own_total(&self, worker: &str) -> u32 {
        self.worker_counts(worker)
            .iter()
            .filter(|(group, _)| matches!(group, FairnessGroup::Own(_)))
            .map(|(_, n)| n)
            .sum()
    }
}

fn normalize(worker: &str) -> String {
    worker.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Sheet;

    fn sheet() -> Sheet {
        Sheet::from_rows(
            "S",
            [
                vec!["SIGLA", "1", "2", "3", "4"],
                vec!["gce", "1T", "7", "", "manr"],
                vec!["YIS", "7", "DESC", "MANR", "TANR"],
                vec!["TURNOS OPERATIVOS", "7", "7", "7", "7"],
            ],
        )
        .with_worker_band(2, 3)
    }

    #[test]
    fn test_contributions() {
        assert_eq!(
            FairnessGroup::contributions(ShiftCode::Seven),
            vec![FairnessGroup::AnyExtra, FairnessGroup::SixHour]
        );
        assert_eq!(
            FairnessGroup::primary(ShiftCode::Masr),
            Some(FairnessGroup::Own(ShiftCode::Masr))
        );
        assert_eq!(FairnessGroup::secondary(ShiftCode::OneT), None);
        assert_eq!(
            FairnessGroup::secondary(ShiftCode::Seven),
            Some(FairnessGroup::SixHour)
        );
        assert!(FairnessGroup::contributions(ShiftCode::Desc).is_empty());
    }

    #[test]
    fn test_scan_counts_existing_codes() {
        let ledger = FairnessLedger::scan(&sheet());
        assert_eq!(ledger.count("GCE", FairnessGroup::AnyExtra), 2);
        assert_eq!(ledger.count("GCE", FairnessGroup::SixHour), 1);
        assert_eq!(ledger.count("yis", FairnessGroup::AnyExtra), 1);
        assert_eq!(ledger.count("YIS", FairnessGroup::Own(ShiftCode::Manr)), 1);
        assert_eq!(ledger.count("GCE", FairnessGroup::Own(ShiftCode::Manr)), 1);
        // aggregate rows are outside the worker band
        assert_eq!(ledger.count("TURNOS OPERATIVOS", FairnessGroup::SixHour), 0);
    }

    #[test]
    fn test_scan_is_idempotent() {
        let sheet = sheet();
        assert_eq!(FairnessLedger::scan(&sheet), FairnessLedger::scan(&sheet));
    }

    #[test]
    fn test_record_and_totals() {
        let mut ledger = FairnessLedger::new();
        ledger.record(" afg", ShiftCode::Tant);
        ledger.record("AFG", ShiftCode::Tant);
        ledger.record("AFG", ShiftCode::Mlpr);
        ledger.record("AFG", ShiftCode::OneT);
        assert_eq!(ledger.count("AFG", FairnessGroup::Own(ShiftCode::Tant)), 2);
        assert_eq!(ledger.own_total("afg"), 3);
        assert_eq!(ledger.worker_counts("AFG").len(), 3);
        assert_eq!(ledger.count("NOBODY", FairnessGroup::AnyExtra), 0);
    }
}
