//! Outcome of an extra-hour run.

use std::fmt;

use serde::Serialize;

use super::tiering::Tier;
use crate::code::ShiftCode;
use crate::decision::{Assignment, DayGate, WorkerVerdict};
use crate::fairness::FairnessLedger;

/// Why a day received no extra-hour code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ExtraSkip {
    /// Headcount row missing or not numeric.
    NoHeadcount,
    /// Too few on duty to need extra hours.
    LowHeadcount { headcount: i64 },
    /// An exclusive code already exists on the day.
    ExclusivePresent {
        target: ShiftCode,
        headcount: i64,
        gate: DayGate,
    },
    /// Nobody survived the eligibility filter.
    NoCandidates {
        target: ShiftCode,
        headcount: i64,
        verdicts: Vec<WorkerVerdict>,
    },
}

impl ExtraSkip {
    /// True when the day called for a code but none could be placed.
    pub fn is_unassigned(&self) -> bool {
        matches!(
            self,
            ExtraSkip::ExclusivePresent { .. } | ExtraSkip::NoCandidates { .. }
        )
    }
}

/// Result for one day column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum ExtraDay {
    Assigned {
        assignment: Assignment,
        tier: Tier,
        headcount: i64,
    },
    Skipped {
        column: usize,
        day: String,
        reason: ExtraSkip,
    },
}

impl ExtraDay {
    pub fn column(&self) -> usize {
        match self {
            ExtraDay::Assigned { assignment, .. } => assignment.column,
            ExtraDay::Skipped { column, .. } => *column,
        }
    }

    pub fn assignment(&self) -> Option<&Assignment> {
        match self {
            ExtraDay::Assigned { assignment, .. } => Some(assignment),
            ExtraDay::Skipped { .. } => None,
        }
    }
}

/// Result of an extra-hour run.
#[derive(Debug, Clone, Serialize)]
pub struct ExtraReport {
    /// One entry per day column, in column order.
    pub days: Vec<ExtraDay>,
    /// Counters after the run.
    #[serde(skip)]
    pub ledger: FairnessLedger,
}

impl ExtraReport {
    pub fn day(&self, column: usize) -> Option<&ExtraDay> {
        self.days.iter().find(|d| d.column() == column)
    }

    pub fn assignments(&self) -> impl Iterator<Item = &Assignment> {
        self.days.iter().filter_map(ExtraDay::assignment)
    }

    pub fn assigned_count(&self) -> usize {
        self.assignments().count()
    }

    /// Days that needed a code but got none.
    pub fn unassigned(&self) -> impl Iterator<Item = (usize, &str, &ExtraSkip)> {
        self.days.iter().filter_map(|d| match d {
            ExtraDay::Skipped {
                column,
                day,
                reason,
            } if reason.is_unassigned() => Some((*column, day.as_str(), reason)),
            _ => None,
        })
    }
}

impl fmt::Display for ExtraReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Extra-hour assignment: {}/{} days assigned",
            self.assigned_count(),
            self.days.len()
        )?;
        for d in &self.days {
            if let ExtraDay::Assigned {
                assignment, tier, ..
            } = d
            {
                writeln!(f, "  {:>8}: {assignment} (tier {})", assignment.day, tier.rank())?;
            }
        }

        let low = self
            .days
            .iter()
            .filter(|d| {
                matches!(
                    d,
                    ExtraDay::Skipped {
                        reason: ExtraSkip::LowHeadcount { .. } | ExtraSkip::NoHeadcount,
                        ..
                    }
                )
            })
            .count();
        if low > 0 {
            writeln!(f, "Days without a target (low or unknown headcount): {low}")?;
        }

        let (gated, restricted): (Vec<_>, Vec<_>) = self
            .unassigned()
            .partition(|(_, _, r)| matches!(r, ExtraSkip::ExclusivePresent { .. }));
        if gated.is_empty() && restricted.is_empty() {
            return writeln!(f, "Every day that needed an extra hour was assigned.");
        }

        if !gated.is_empty() {
            writeln!(f, "Exclusive code already present ({} days):", gated.len())?;
            for (column, day, reason) in &gated {
                if let ExtraSkip::ExclusivePresent { target, gate, .. } = reason {
                    writeln!(f, "  {day} (col {column}) - target {target}: {gate}")?;
                }
            }
        }
        if !restricted.is_empty() {
            writeln!(f, "Worker restrictions ({} days):", restricted.len())?;
            for (column, day, reason) in &restricted {
                if let ExtraSkip::NoCandidates {
                    target,
                    headcount,
                    verdicts,
                } = reason
                {
                    writeln!(
                        f,
                        "  {day} (col {column}) - target {target}, headcount {headcount}"
                    )?;
                    for v in verdicts {
                        writeln!(f, "    {v}")?;
                    }
                }
            }
        }
        Ok(())
    }
}
