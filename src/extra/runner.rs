//! Extra-hour day decision loop.

use rand::Rng;
use tracing::{debug, info, warn};

use super::config::ExtraConfig;
use super::eligibility::ExtraFilter;
use super::report::{ExtraDay, ExtraReport, ExtraSkip};
use super::tiering::partition;
use crate::decision::{commit, create_rng, ConfigError};
use crate::fairness::FairnessLedger;
use crate::grid::RosterGrid;
use crate::selection::EquitySelector;

/// Executes the extra-hour engine.
pub struct ExtraRunner;

impl ExtraRunner {
    /// Runs over every day column, seeding the tie-break from the config.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_rosterfill::extra::{ExtraConfig, ExtraRunner};
    /// use u_rosterfill::grid::{RosterGrid, Sheet};
    ///
    /// let mut sheet = Sheet::from_rows(
    ///     "March",
    ///     [
    ///         vec!["SIGLA", "1", "2"],
    ///         vec!["GCE", "", "DESC"],
    ///         vec!["YIS", "", ""],
    ///         vec!["TURNOS OPERATIVOS", "9", "8"],
    ///     ],
    /// )
    /// .with_worker_band(2, 3);
    ///
    /// let config = ExtraConfig::default().with_workers(["GCE", "YIS"]).with_seed(3);
    /// let report = ExtraRunner::run(&mut sheet, &config).unwrap();
    /// assert_eq!(report.assigned_count(), 1);
    /// ```
    pub fn run<G: RosterGrid + ?Sized>(
        grid: &mut G,
        config: &ExtraConfig,
    ) -> Result<ExtraReport, ConfigError> {
        let mut rng = create_rng(config.seed);
        Self::run_with_rng(grid, config, &mut rng)
    }

    /// Runs with a caller-supplied random source.
    pub fn run_with_rng<G: RosterGrid + ?Sized, R: Rng + ?Sized>(
        grid: &mut G,
        config: &ExtraConfig,
        rng: &mut R,
    ) -> Result<ExtraReport, ConfigError> {
        config.validate().map_err(ConfigError)?;

        let mut ledger = FairnessLedger::scan(&*grid);
        let columns = grid.day_columns();
        info!(
            days = columns.clone().count(),
            workers = config.eligible_workers.len(),
            "starting extra-hour assignment"
        );

        let days: Vec<ExtraDay> = columns
            .map(|col| Self::assign_day(grid, config, &mut ledger, col, rng))
            .collect();

        let report = ExtraReport { days, ledger };
        info!(
            assigned = report.assigned_count(),
            unassigned = report.unassigned().count(),
            "extra-hour assignment finished"
        );
        Ok(report)
    }

    /// Decides a single day. Mutates the grid and ledger only on success.
    pub fn assign_day<G: RosterGrid + ?Sized, R: Rng + ?Sized>(
        grid: &mut G,
        config: &ExtraConfig,
        ledger: &mut FairnessLedger,
        col: usize,
        rng: &mut R,
    ) -> ExtraDay {
        let day = grid.day_label(col);
        let skipped = |reason: ExtraSkip| ExtraDay::Skipped {
            column: col,
            day: day.clone(),
            reason,
        };

        let Some(headcount) = grid.aggregate(&config.headcount_label, col) else {
            debug!(day = %day, "no headcount, skipping");
            return skipped(ExtraSkip::NoHeadcount);
        };
        let Some(target) = config.target_for(headcount) else {
            debug!(day = %day, headcount, "headcount too low, skipping");
            return skipped(ExtraSkip::LowHeadcount { headcount });
        };

        let filter = ExtraFilter::new(&*grid, config);
        if let Some(gate) = filter.day_gate(col) {
            warn!(day = %day, %target, "{gate}");
            return skipped(ExtraSkip::ExclusivePresent {
                target,
                headcount,
                gate,
            });
        }

        let eligible = filter.eligible(col, target);
        if eligible.is_empty() {
            warn!(day = %day, %target, "no eligible worker");
            return skipped(ExtraSkip::NoCandidates {
                target,
                headcount,
                verdicts: filter.explain_all(col, target),
            });
        }

        let selector = EquitySelector::for_code(target);
        for (tier, members) in partition(&*grid, &eligible, col) {
            let names: Vec<String> = members.iter().map(|(w, _)| w.clone()).collect();
            let Some(worker) = selector.select(&names, ledger, rng) else {
                continue;
            };
            let Some(&(_, row)) = members.iter().find(|(w, _)| *w == worker) else {
                continue;
            };
            debug!(day = %day, tier = tier.rank(), worker = %worker, "tier pick");
            let assignment = commit(grid, ledger, row, col, &worker, target);
            return ExtraDay::Assigned {
                assignment,
                tier,
                headcount,
            };
        }

        // Unreachable while `eligible` is non-empty: every candidate has a tier.
        skipped(ExtraSkip::NoCandidates {
            target,
            headcount,
            verdicts: ExtraFilter::new(&*grid, config).explain_all(col, target),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::ShiftCode;
    use crate::extra::Tier;
    use crate::fairness::FairnessGroup;
    use crate::grid::Sheet;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn config(workers: &[&str]) -> ExtraConfig {
        ExtraConfig::default()
            .with_workers(workers.iter().copied())
            .with_seed(17)
    }

    #[test]
    fn test_seven_goes_to_lowest_counter() {
        let mut sheet = Sheet::from_rows(
            "S",
            [
                vec!["SIGLA", "D1", "D2", "D3", "D4", "D5"],
                vec!["A", "", "", "", "", ""],
                vec!["B", "1T", "", "", "", "7"],
                vec!["TURNOS OPERATIVOS", "0", "0", "9", "0", "0"],
            ],
        )
        .with_worker_band(2, 3);
        let report = ExtraRunner::run(&mut sheet, &config(&["A", "B"])).unwrap();

        assert_eq!(sheet.cell(2, 4), Some("7"));
        assert_eq!(report.assigned_count(), 1);
        let a = report.assignments().next().unwrap();
        assert_eq!((a.worker.as_str(), a.code), ("A", ShiftCode::Seven));
    }

    #[test]
    fn test_one_t_on_ten() {
        let mut sheet = Sheet::from_rows(
            "S",
            [
                vec!["SIGLA", "D1"],
                vec!["A", ""],
                vec!["TURNOS OPERATIVOS", "10"],
            ],
        )
        .with_worker_band(2, 2);
        let mut rng = StdRng::seed_from_u64(0);
        let report = ExtraRunner::run_with_rng(&mut sheet, &config(&["A"]), &mut rng).unwrap();
        assert_eq!(sheet.cell(2, 2), Some("1T"));
        assert!(matches!(
            report.day(2),
            Some(ExtraDay::Assigned {
                tier: Tier::Clean,
                headcount: 10,
                ..
            })
        ));
    }

    #[test]
    fn test_hard_yesterday_leaves_day_unassigned() {
        let mut sheet = Sheet::from_rows(
            "S",
            [
                vec!["SIGLA", "D1", "D2"],
                vec!["A", "NANRD", ""],
                vec!["B", "DESC", "VACA"],
                vec!["TURNOS OPERATIVOS", "0", "10"],
            ],
        )
        .with_worker_band(2, 3);
        let report = ExtraRunner::run(&mut sheet, &config(&["A", "B"])).unwrap();

        assert_eq!(sheet.cell(2, 3), None);
        assert_eq!(report.assigned_count(), 0);
        let (_, _, reason) = report.unassigned().next().unwrap();
        match reason {
            ExtraSkip::NoCandidates { verdicts, .. } => {
                assert_eq!(verdicts.len(), 2);
                assert!(verdicts.iter().all(|v| !v.is_available()));
            }
            other => panic!("unexpected skip: {other:?}"),
        }
    }

    #[test]
    fn test_existing_exclusive_blocks_day() {
        let mut sheet = Sheet::from_rows(
            "S",
            [
                vec!["SIGLA", "D1"],
                vec!["A", ""],
                vec!["B", "1T"],
                vec!["TURNOS OPERATIVOS", "12"],
            ],
        )
        .with_worker_band(2, 3);
        let report = ExtraRunner::run(&mut sheet, &config(&["A", "B"])).unwrap();
        assert_eq!(sheet.cell(2, 2), None);
        assert!(matches!(
            report.day(2),
            Some(ExtraDay::Skipped {
                reason: ExtraSkip::ExclusivePresent { .. },
                ..
            })
        ));
    }

    #[test]
    fn test_rested_worker_preferred_over_fairer_one() {
        // B has more extras but rested yesterday, so tier 1 wins over fairness.
        let mut sheet = Sheet::from_rows(
            "S",
            [
                vec!["SIGLA", "D1", "D2", "D3", "D4"],
                vec!["A", "", "", "", ""],
                vec!["B", "1T", "", "DESC", ""],
                vec!["TURNOS OPERATIVOS", "0", "0", "0", "10"],
            ],
        )
        .with_worker_band(2, 3);
        let report = ExtraRunner::run(&mut sheet, &config(&["A", "B"])).unwrap();
        assert_eq!(sheet.cell(3, 5), Some("1T"));
        assert!(matches!(
            report.day(5),
            Some(ExtraDay::Assigned {
                tier: Tier::RestedClean,
                ..
            })
        ));
    }

    #[test]
    fn test_consecutive_days_alternate() {
        // Two workers, every day needs a 1T; hard rules forbid back-to-back.
        let mut sheet = Sheet::from_rows(
            "S",
            [
                vec!["SIGLA", "D1", "D2", "D3", "D4"],
                vec!["A", "", "", "", ""],
                vec!["B", "", "", "", ""],
                vec!["TURNOS OPERATIVOS", "10", "10", "10", "10"],
            ],
        )
        .with_worker_band(2, 3);
        let report = ExtraRunner::run(&mut sheet, &config(&["A", "B"])).unwrap();
        assert_eq!(report.assigned_count(), 4);
        for col in 3..=5 {
            assert_ne!(
                sheet.cell(2, col).is_some(),
                sheet.cell(2, col - 1).is_some()
            );
        }
        assert_eq!(report.ledger.count("A", FairnessGroup::AnyExtra), 2);
        assert_eq!(report.ledger.count("B", FairnessGroup::AnyExtra), 2);
        assert_eq!(report.ledger, FairnessLedger::scan(&sheet));
    }

    #[test]
    fn test_summary_shows_tier_rank() {
        let mut sheet = Sheet::from_rows(
            "S",
            [
                vec!["SIGLA", "D1", "D2"],
                vec!["A", "DESC", ""],
                vec!["TURNOS OPERATIVOS", "0", "10"],
            ],
        )
        .with_worker_band(2, 2);
        let report = ExtraRunner::run(&mut sheet, &config(&["A"])).unwrap();
        let text = report.to_string();
        assert!(text.contains("1T->A (tier 1)"), "{text}");
    }

    #[test]
    fn test_invalid_config() {
        let mut sheet = Sheet::new("S");
        let config = ExtraConfig::default().with_workers(Vec::<String>::new());
        assert!(ExtraRunner::run(&mut sheet, &config).is_err());
    }
}
