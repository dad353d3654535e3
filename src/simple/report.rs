//! Outcome of a simplified-shift run.

use std::fmt;

use serde::Serialize;

use crate::code::ShiftCode;
use crate::decision::{Assignment, DayGate, WorkerVerdict};
use crate::fairness::{FairnessGroup, FairnessLedger};

/// Which pool served the first phase of a conflict day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PoolChoice {
    Preferred,
    Alternate,
}

/// Why a normal day received no simplified shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SimpleSkip {
    /// The day column has no header.
    NoHeader,
    /// Ten or fewer on duty.
    LowHeadcount { headcount: i64 },
    /// Fewer available workers than codes to place.
    InsufficientAvailability {
        headcount: i64,
        available: usize,
        required: usize,
        verdicts: Vec<WorkerVerdict>,
    },
    /// Every planned code already existed on the day.
    AlreadyCovered { headcount: i64 },
}

/// Result for one day column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum SimpleDay {
    Assigned {
        column: usize,
        day: String,
        headcount: i64,
        available: usize,
        assignments: Vec<Assignment>,
    },
    Conflict {
        column: usize,
        day: String,
        gate: DayGate,
        pool: PoolChoice,
        assignments: Vec<Assignment>,
    },
    Skipped {
        column: usize,
        day: String,
        reason: SimpleSkip,
    },
}

impl SimpleDay {
    pub fn column(&self) -> usize {
        match self {
            SimpleDay::Assigned { column, .. }
            | SimpleDay::Conflict { column, .. }
            | SimpleDay::Skipped { column, .. } => *column,
        }
    }

    pub fn assignments(&self) -> &[Assignment] {
        match self {
            SimpleDay::Assigned { assignments, .. } | SimpleDay::Conflict { assignments, .. } => {
                assignments
            }
            SimpleDay::Skipped { .. } => &[],
        }
    }
}

/// Per-worker counts of simplified shifts after the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EquityRow {
    pub worker: String,
    pub counts: Vec<(ShiftCode, u32)>,
    pub total: u32,
}

impl EquityRow {
    /// Codes tracked in the summary, in column order.
    pub fn columns() -> impl Iterator<Item = ShiftCode> {
        ShiftCode::ALL.into_iter().filter(|c| c.is_single_purpose())
    }

    /// Builds the row from the ledger; `None` when the worker has no such code.
    pub fn from_ledger(worker: &str, ledger: &FairnessLedger) -> Option<Self> {
        let counts: Vec<(ShiftCode, u32)> = Self::columns()
            .map(|code| (code, ledger.count(worker, FairnessGroup::Own(code))))
            .collect();
        let total = ledger.own_total(worker);
        (total > 0).then(|| Self {
            worker: worker.to_uppercase(),
            counts,
            total,
        })
    }
}

/// Result of a simplified-shift run.
#[derive(Debug, Clone, Serialize)]
pub struct SimpleReport {
    /// One entry per day column, in column order.
    pub days: Vec<SimpleDay>,
    /// Workers from any pool with at least one simplified shift, sorted.
    pub equity: Vec<EquityRow>,
    /// Row of the refreshed headcount, if it was rewritten.
    pub headcount_row: Option<usize>,
    /// Counters after the run.
    #[serde(skip)]
    pub ledger: FairnessLedger,
}

impl SimpleReport {
    pub fn day(&self, column: usize) -> Option<&SimpleDay> {
        self.days.iter().find(|d| d.column() == column)
    }

    pub fn assignments(&self) -> impl Iterator<Item = &Assignment> {
        self.days.iter().flat_map(SimpleDay::assignments)
    }

    pub fn assigned_count(&self) -> usize {
        self.assignments().count()
    }

    fn skipped(&self) -> impl Iterator<Item = (&str, &SimpleSkip)> {
        self.days.iter().filter_map(|d| match d {
            SimpleDay::Skipped { day, reason, .. } => Some((day.as_str(), reason)),
            _ => None,
        })
    }
}

impl fmt::Display for SimpleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let normal: Vec<_> = self
            .days
            .iter()
            .filter_map(|d| match d {
                SimpleDay::Assigned {
                    day,
                    headcount,
                    available,
                    assignments,
                    ..
                } => Some((day, headcount, available, assignments)),
                _ => None,
            })
            .collect();
        writeln!(f, "Simplified shifts: {} days assigned", normal.len())?;
        for (day, headcount, available, assignments) in &normal {
            writeln!(
                f,
                "  {day:>8}: {:40} (headcount {headcount:2}, available {available})",
                join(assignments)
            )?;
        }

        let conflicts: Vec<_> = self
            .days
            .iter()
            .filter_map(|d| match d {
                SimpleDay::Conflict {
                    day,
                    gate,
                    pool,
                    assignments,
                    ..
                } => Some((day, gate, pool, assignments)),
                _ => None,
            })
            .collect();
        if !conflicts.is_empty() {
            writeln!(f, "Conflict days: {}", conflicts.len())?;
            for (day, gate, pool, assignments) in &conflicts {
                let listed = if assignments.is_empty() {
                    "nothing assigned".to_string()
                } else {
                    join(assignments)
                };
                writeln!(f, "  {day:>8}: {listed:60} ({gate}, {pool:?} pool)")?;
            }
        }

        let skipped: Vec<_> = self
            .skipped()
            .filter(|(_, r)| !matches!(r, SimpleSkip::NoHeader))
            .collect();
        if !skipped.is_empty() {
            writeln!(f, "Days without assignment: {}", skipped.len())?;
            for (day, reason) in &skipped {
                match reason {
                    SimpleSkip::LowHeadcount { headcount } => {
                        writeln!(f, "  {day:>8}: headcount {headcount:2} - too few on duty")?
                    }
                    SimpleSkip::InsufficientAvailability {
                        headcount,
                        available,
                        required,
                        ..
                    } => writeln!(
                        f,
                        "  {day:>8}: headcount {headcount:2} - {available} available, {required} needed"
                    )?,
                    SimpleSkip::AlreadyCovered { headcount } => writeln!(
                        f,
                        "  {day:>8}: headcount {headcount:2} - codes already present"
                    )?,
                    SimpleSkip::NoHeader => {}
                }
            }
        }

        if !self.equity.is_empty() {
            write!(f, "{:>10}", "Worker")?;
            for code in EquityRow::columns() {
                write!(f, " {:>5}", code.as_str())?;
            }
            writeln!(f, " {:>6}", "TOTAL")?;
            for row in &self.equity {
                write!(f, "{:>10}", row.worker)?;
                for (_, n) in &row.counts {
                    write!(f, " {n:>5}")?;
                }
                writeln!(f, " {:>6}", row.total)?;
            }
        }
        Ok(())
    }
}

fn join(assignments: &[Assignment]) -> String {
    assignments
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
