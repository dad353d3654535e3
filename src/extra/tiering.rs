//! Soft-preference tiers for extra-hour candidates.

use serde::Serialize;

use crate::code::{EXTRA, REST, SOFT_BEFORE};
use crate::grid::RosterGrid;

/// Priority tier derived from yesterday's code; earlier is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    /// Rested yesterday, nothing discouraged, no extra.
    RestedClean,
    /// Nothing discouraged and no extra yesterday.
    Clean,
    /// Rested yesterday but also a soft restriction.
    RestedSoft,
    /// Soft restriction yesterday.
    Soft,
    /// Anyone else still eligible.
    Fallback,
}

impl Tier {
    /// Tiers in consumption order.
    pub const ORDER: [Tier; 5] = [
        Tier::RestedClean,
        Tier::Clean,
        Tier::RestedSoft,
        Tier::Soft,
        Tier::Fallback,
    ];

    /// 1-based rank for reports.
    pub fn rank(self) -> usize {
        self as usize + 1
    }
}

/// Classifies a candidate from yesterday's cell text (`None` when blank or
/// before the first day).
pub fn tier_of(yesterday: Option<&str>) -> Tier {
    let rested = yesterday.and_then(|t| REST.matches(t)).is_some();
    let soft = yesterday.and_then(|t| SOFT_BEFORE.matches(t)).is_some();
    let extra = yesterday.and_then(|t| EXTRA.matches(t)).is_some();

    match (rested, soft, extra) {
        (true, false, false) => Tier::RestedClean,
        (_, false, false) => Tier::Clean,
        (true, true, _) => Tier::RestedSoft,
        (false, true, _) => Tier::Soft,
        _ => Tier::Fallback,
    }
}

/// Groups candidates (worker, row) by tier, best tier first.
///
/// Empty tiers are omitted; member order follows the input.
pub fn partition<G: RosterGrid + ?Sized>(
    grid: &G,
    candidates: &[(String, usize)],
    col: usize,
) -> Vec<(Tier, Vec<(String, usize)>)> {
    Tier::ORDER
        .into_iter()
        .filter_map(|tier| {
            let members: Vec<(String, usize)> = candidates
                .iter()
                .filter(|(_, row)| tier_of(grid.previous_cell(*row, col)) == tier)
                .cloned()
                .collect();
            (!members.is_empty()).then_some((tier, members))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Sheet;

    #[test]
    fn test_tier_of() {
        assert_eq!(tier_of(Some("DESC")), Tier::RestedClean);
        assert_eq!(tier_of(Some("sind")), Tier::RestedClean);
        assert_eq!(tier_of(None), Tier::Clean);
        assert_eq!(tier_of(Some("MANR")), Tier::Clean);
        assert_eq!(tier_of(Some("NANTD")), Tier::Soft);
        assert_eq!(tier_of(Some("1T")), Tier::Fallback);
        assert_eq!(tier_of(Some("7")), Tier::Fallback);
    }

    #[test]
    fn test_rank_and_order() {
        assert_eq!(Tier::RestedClean.rank(), 1);
        assert_eq!(Tier::Fallback.rank(), 5);
        assert!(Tier::Clean < Tier::Soft);
    }

    #[test]
    fn test_partition_orders_tiers() {
        let sheet = Sheet::from_rows(
            "S",
            [
                vec!["SIGLA", "D1", "D2"],
                vec!["A", "NLPTD", ""],
                vec!["B", "", ""],
                vec!["C", "TROP", ""],
                vec!["D", "VACA", ""],
            ],
        )
        .with_worker_band(2, 5);
        let candidates: Vec<(String, usize)> = ["A", "B", "C", "D"]
            .iter()
            .enumerate()
            .map(|(i, w)| (w.to_string(), i + 2))
            .collect();

        let tiers = partition(&sheet, &candidates, 3);
        let shape: Vec<(Tier, Vec<&str>)> = tiers
            .iter()
            .map(|(t, m)| (*t, m.iter().map(|(w, _)| w.as_str()).collect()))
            .collect();
        assert_eq!(
            shape,
            vec![
                (Tier::RestedClean, vec!["C"]),
                (Tier::Clean, vec!["B", "D"]),
                (Tier::Soft, vec!["A"]),
            ]
        );

        // On the first day there is no yesterday: everyone is Clean.
        let first = partition(&sheet, &candidates, 2);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].0, Tier::Clean);
    }
}
