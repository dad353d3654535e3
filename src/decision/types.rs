//! Decision outcomes and diagnostics.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::code::ShiftCode;

/// Invalid engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid configuration: {0}")]
pub struct ConfigError(pub String);

/// Rejects blank identifiers and identifiers listed twice in `pool`,
/// comparing trimmed and upper-cased.
pub fn check_pool(name: &str, pool: &[String]) -> Result<(), String> {
    let mut seen = HashSet::new();
    for worker in pool {
        let id = worker.trim().to_uppercase();
        if id.is_empty() {
            return Err(format!("{name} contains a blank identifier"));
        }
        if !seen.insert(id) {
            return Err(format!("{name} lists {} more than once", worker.trim()));
        }
    }
    Ok(())
}

/// Why a worker cannot receive a code on a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "kebab-case")]
pub enum Rejection {
    /// The worker has no row in the grid.
    WorkerMissing,
    /// Today's cell already holds something.
    Occupied { value: String },
    /// The cell was filled when the run started.
    PreAssigned,
    /// Yesterday's code forbids the assignment.
    HardConstraintYesterday { code: ShiftCode },
    /// Tomorrow's code forbids the assignment.
    HardConstraintTomorrow { code: ShiftCode },
    /// A capacity aggregate for the day is above the worker's limit.
    CapacityRestriction { count: i64, limit: i64 },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::WorkerMissing => write!(f, "worker not found in the sheet"),
            Rejection::Occupied { value } => write!(f, "cell occupied: '{value}'"),
            Rejection::PreAssigned => write!(f, "cell was filled before this run"),
            Rejection::HardConstraintYesterday { code } => {
                write!(f, "hard constraint yesterday: '{code}'")
            }
            Rejection::HardConstraintTomorrow { code } => {
                write!(f, "hard constraint tomorrow: '{code}'")
            }
            Rejection::CapacityRestriction { count, limit } => {
                write!(f, "capacity restriction: {count} > {limit}")
            }
        }
    }
}

/// A day-level condition that stops normal assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "gate", rename_all = "kebab-case")]
pub enum DayGate {
    /// An exclusive code already exists on the day.
    DayGated { code: ShiftCode, row: usize },
    /// A conflict marker exists on the day.
    ConflictPresent { code: ShiftCode, row: usize },
}

impl DayGate {
    pub fn code(&self) -> ShiftCode {
        match self {
            DayGate::DayGated { code, .. } | DayGate::ConflictPresent { code, .. } => *code,
        }
    }
}

impl fmt::Display for DayGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayGate::DayGated { code, row } => {
                write!(f, "exclusive code '{code}' already present (row {row})")
            }
            DayGate::ConflictPresent { code, row } => {
                write!(f, "conflict marker '{code}' present (row {row})")
            }
        }
    }
}

/// Soft observations that only affect priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "signal", rename_all = "kebab-case")]
pub enum SoftSignal {
    /// Yesterday held a discouraged code.
    SoftRestrictionYesterday { code: ShiftCode },
    /// Yesterday held an extra-hour code.
    ExtraYesterday { code: ShiftCode },
}

impl fmt::Display for SoftSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SoftSignal::SoftRestrictionYesterday { code } => {
                write!(f, "soft restriction yesterday: '{code}'")
            }
            SoftSignal::ExtraYesterday { code } => write!(f, "extra shift yesterday: '{code}'"),
        }
    }
}

/// Full eligibility breakdown for one worker on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkerVerdict {
    pub worker: String,
    pub rejections: Vec<Rejection>,
    pub signals: Vec<SoftSignal>,
}

impl WorkerVerdict {
    pub fn is_available(&self) -> bool {
        self.rejections.is_empty()
    }
}

impl fmt::Display for WorkerVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.is_available() {
            "AVAILABLE"
        } else {
            "NOT AVAILABLE"
        };
        write!(f, "{:<4} | {status}", self.worker)?;
        for r in &self.rejections {
            write!(f, "\n      - {r}")?;
        }
        for s in &self.signals {
            write!(f, "\n      - {s}")?;
        }
        Ok(())
    }
}

/// A code written into the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub column: usize,
    pub day: String,
    pub worker: String,
    pub code: ShiftCode,
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.code, self.worker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_check_pool() {
        assert!(check_pool("pool", &ids(&["HLG", "ECE"])).is_ok());
        assert!(check_pool("pool", &[]).is_ok());
        assert_eq!(
            check_pool("pool", &ids(&["HLG", " "])),
            Err("pool contains a blank identifier".to_string())
        );
        assert_eq!(
            check_pool("pool", &ids(&["HLG", "ECE", " hlg"])),
            Err("pool lists hlg more than once".to_string())
        );
    }
}
