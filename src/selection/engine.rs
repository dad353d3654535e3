//! Rule composition engine.

use rand::seq::IndexedRandom;
use rand::Rng;

use super::types::PriorityRule;

/// Strategy for breaking ties when all rules produce equal scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreaker {
    /// Uniform random choice among the tied items.
    Random,

    /// Keep the item that came first in the input (deterministic).
    FirstInOrder,
}

/// Engine for composing and applying sequential priority rules.
///
/// # Examples
///
/// ```ignore
/// let engine = RuleEngine::new()
///     .with_rule(GroupCount::new(FairnessGroup::AnyExtra))
///     .with_rule(GroupCount::new(FairnessGroup::SixHour))
///     .with_tie_breaker(TieBreaker::Random);
///
/// let picked = engine.select(&candidates, &ledger, &mut rng);
/// ```
pub struct RuleEngine<T, C> {
    rules: Vec<Box<dyn PriorityRule<T, C>>>,
    tie_breaker: TieBreaker,
}

impl<T, C> RuleEngine<T, C> {
    /// Creates an engine with no rules and random tie-breaking.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::Random,
        }
    }

    /// Sets the tie-breaking strategy.
    pub fn with_tie_breaker(mut self, tb: TieBreaker) -> Self {
        self.tie_breaker = tb;
        self
    }

    /// Appends a rule; earlier rules take precedence.
    pub fn with_rule<R: PriorityRule<T, C> + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Returns the number of rules in this engine.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the names of all rules in order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn tie_breaker(&self) -> TieBreaker {
        self.tie_breaker
    }

    /// Indices of the items that survive every rule, in input order.
    ///
    /// Each rule keeps the items at its minimum score. A rule is skipped
    /// once a single item remains.
    pub fn shortlist_indices(&self, items: &[T], context: &C) -> Vec<usize> {
        let mut survivors: Vec<usize> = (0..items.len()).collect();

        for rule in &self.rules {
            if survivors.len() <= 1 {
                break;
            }
            let scores: Vec<i64> = survivors
                .iter()
                .map(|&i| rule.score(&items[i], context))
                .collect();
            let Some(&best) = scores.iter().min() else {
                break;
            };
            survivors = survivors
                .into_iter()
                .zip(scores)
                .filter(|&(_, s)| s == best)
                .map(|(i, _)| i)
                .collect();
        }

        survivors
    }

    /// Items that survive every rule, in input order.
    pub fn shortlist<'a>(&self, items: &'a [T], context: &C) -> Vec<&'a T> {
        self.shortlist_indices(items, context)
            .into_iter()
            .map(|i| &items[i])
            .collect()
    }

    /// Returns the index of the chosen item.
    ///
    /// Returns `None` only if the slice is empty.
    pub fn select<R: Rng + ?Sized>(&self, items: &[T], context: &C, rng: &mut R) -> Option<usize> {
        let shortlist = self.shortlist_indices(items, context);
        match self.tie_breaker {
            TieBreaker::Random => shortlist.choose(rng).copied(),
            TieBreaker::FirstInOrder => shortlist.first().copied(),
        }
    }
}

impl<T, C> Default for RuleEngine<T, C> {
    fn default() -> Self {
        Self::new()
    }
}
