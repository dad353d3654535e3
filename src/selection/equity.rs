//! Fairness-counter selection.

use rand::Rng;

use super::engine::{RuleEngine, TieBreaker};
use super::types::PriorityRule;
use crate::code::ShiftCode;
use crate::fairness::{FairnessGroup, FairnessLedger};

/// Scores a worker by one of their fairness counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupCount {
    group: FairnessGroup,
}

impl GroupCount {
    pub fn new(group: FairnessGroup) -> Self {
        Self { group }
    }
}

impl PriorityRule<String, FairnessLedger> for GroupCount {
    fn name(&self) -> &str {
        match self.group {
            FairnessGroup::AnyExtra => "AnyExtraCount",
            FairnessGroup::SixHour => "SixHourCount",
            FairnessGroup::Own(_) => "OwnCodeCount",
        }
    }

    fn score(&self, worker: &String, ledger: &FairnessLedger) -> i64 {
        i64::from(ledger.count(worker, self.group))
    }
}

/// Picks the worker who has received the least of a code's fairness group.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_rosterfill::code::ShiftCode;
/// use u_rosterfill::fairness::FairnessLedger;
/// use u_rosterfill::selection::EquitySelector;
///
/// let mut ledger = FairnessLedger::new();
/// ledger.record("B", ShiftCode::OneT);
///
/// let candidates = vec!["A".to_string(), "B".to_string()];
/// let mut rng = StdRng::seed_from_u64(1);
/// let picked = EquitySelector::for_code(ShiftCode::Seven).select(&candidates, &ledger, &mut rng);
/// assert_eq!(picked.as_deref(), Some("A"));
/// ```
pub struct EquitySelector {
    engine: RuleEngine<String, FairnessLedger>,
}

impl EquitySelector {
    /// Builds the rule chain for `code`: primary group, then the secondary
    /// group when the code feeds two groups.
    pub fn for_code(code: ShiftCode) -> Self {
        let mut engine = RuleEngine::new().with_tie_breaker(TieBreaker::Random);
        if let Some(group) = FairnessGroup::primary(code) {
            engine = engine.with_rule(GroupCount::new(group));
        }
        if let Some(group) = FairnessGroup::secondary(code) {
            engine = engine.with_rule(GroupCount::new(group));
        }
        Self { engine }
    }

    /// Candidates tied after the counter rules, before the random draw.
    pub fn finalists<'a>(&self, candidates: &'a [String], ledger: &FairnessLedger) -> Vec<&'a String> {
        self.engine.shortlist(candidates, ledger)
    }

    /// Returns `None` only if `candidates` is empty.
    pub fn select<R: Rng + ?Sized>(
        &self,
        candidates: &[String],
        ledger: &FairnessLedger,
        rng: &mut R,
    ) -> Option<String> {
        self.engine
            .select(candidates, ledger, rng)
            .map(|i| candidates[i].clone())
    }
}
