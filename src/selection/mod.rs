//! Equitable candidate selection.
//!
//! A small sequential rule engine ranks candidates by integer scores: the
//! first rule keeps only the minimum-scoring candidates, later rules are
//! consulted only while more than one candidate remains, and a
//! [`TieBreaker`] settles whatever tie is left.
//!
//! [`EquitySelector`] instantiates the engine with fairness counters:
//!
//! - primary: the counter of the group the target code feeds
//! - secondary: only for codes feeding two groups (`7`)
//! - uniform random choice among the remaining candidates
//!
//! # References
//!
//! Dispatching rule composition: Pinedo (2016), "Scheduling: Theory,
//! Algorithms, and Systems"

mod engine;
mod equity;
mod types;

pub use engine::{RuleEngine, TieBreaker};
pub use equity::{EquitySelector, GroupCount};
pub use types::PriorityRule;
