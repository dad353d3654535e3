//! Fairness-balanced supplementary shift assignment over monthly rosters.
//!
//! A roster is a grid: one row per worker, one column per day, each cell a
//! shift code. Two engines walk the days in order and fill empty cells with
//! supplementary codes when the day's operative headcount calls for them:
//!
//! - **Extra hours** ([`extra`]): one `1T` or `7` per day, filtered by hard
//!   adjacency rules, ranked by soft preference tiers from yesterday's code
//! - **Simplified shifts** ([`simple`]): MANR/TANR/MASR/TASR/ASIG by
//!   headcount, with a two-phase conflict path on days holding BLPTD/NANRD
//!
//! Both pick among candidates with the same equity rule: fewest codes of the
//! relevant [`fairness`] group first, then a seedable random tie-break.
//!
//! # Architecture
//!
//! - [`code`]: closed shift code vocabulary and rule membership tables
//! - [`grid`]: the [`grid::RosterGrid`] trait, an in-memory sheet, JSON
//!   workbook persistence, headcount and statistics aggregates
//! - [`fairness`]: per-worker counters derived from the grid
//! - [`selection`]: sequential priority rule engine and the equity selector
//! - [`decision`]: rejection reasons, day gates and the commit step
//!
//! Skipped days are values in the run reports, never errors.

pub mod code;
pub mod decision;
pub mod extra;
pub mod fairness;
pub mod grid;
pub mod selection;
pub mod simple;
