//! Simplified-shift day decision loop.

use std::collections::BTreeSet;

use rand::Rng;
use tracing::{debug, info, warn};

use super::config::SimpleConfig;
use super::eligibility::{SimpleFilter, Snapshot};
use super::report::{EquityRow, PoolChoice, SimpleDay, SimpleReport, SimpleSkip};
use crate::code::{CodeSet, CONFLICT_FIRST_PHASE, CONFLICT_SECOND_PHASE};
use crate::decision::{commit, create_rng, Assignment, ConfigError, DayGate};
use crate::fairness::FairnessLedger;
use crate::grid::{operative_count, refresh_operative_row, RosterGrid};
use crate::selection::EquitySelector;

/// Header of the worker-id column when a sheet repeats it among the days.
const ID_COLUMN_HEADER: &str = "SIGLA ATCO";

/// Executes the simplified-shift engine.
pub struct SimpleRunner;

impl SimpleRunner {
    /// Runs over every day column, seeding the tie-break from the config.
    pub fn run<G: RosterGrid + ?Sized>(
        grid: &mut G,
        config: &SimpleConfig,
    ) -> Result<SimpleReport, ConfigError> {
        let mut rng = create_rng(config.seed);
        Self::run_with_rng(grid, config, &mut rng)
    }

    /// Runs with a caller-supplied random source.
    ///
    /// The availability snapshot is taken before anything is written, so a
    /// cell filled when the run starts stays unavailable even if cleared.
    pub fn run_with_rng<G: RosterGrid + ?Sized, R: Rng + ?Sized>(
        grid: &mut G,
        config: &SimpleConfig,
        rng: &mut R,
    ) -> Result<SimpleReport, ConfigError> {
        config.validate().map_err(ConfigError)?;

        let snapshot = Snapshot::take(&*grid);
        let headcount_row = if config.refresh_headcount {
            refresh_operative_row(grid)
        } else {
            None
        };
        let mut ledger = FairnessLedger::scan(&*grid);
        info!(
            days = grid.day_columns().count(),
            prefilled = snapshot.len(),
            "starting simplified-shift assignment"
        );

        let days: Vec<SimpleDay> = grid
            .day_columns()
            .map(|col| Self::assign_day(grid, config, &snapshot, &mut ledger, col, rng))
            .collect();

        let equity = Self::equity(&*grid, config, &ledger);
        let report = SimpleReport {
            days,
            equity,
            headcount_row,
            ledger,
        };
        info!(
            assigned = report.assigned_count(),
            "simplified-shift assignment finished"
        );
        Ok(report)
    }

    /// Decides a single day. Mutates the grid and ledger only on commits.
    pub fn assign_day<G: RosterGrid + ?Sized, R: Rng + ?Sized>(
        grid: &mut G,
        config: &SimpleConfig,
        snapshot: &Snapshot,
        ledger: &mut FairnessLedger,
        col: usize,
        rng: &mut R,
    ) -> SimpleDay {
        let day = grid.day_label(col);
        let skipped = |reason: SimpleSkip| SimpleDay::Skipped {
            column: col,
            day: day.clone(),
            reason,
        };
        match grid.cell(1, col) {
            Some(header) if !header.trim().eq_ignore_ascii_case(ID_COLUMN_HEADER) => {}
            _ => return skipped(SimpleSkip::NoHeader),
        }

        let filter = SimpleFilter::new(&*grid, snapshot);
        if let Some(gate) = filter.conflict_marker(col) {
            debug!(day = %day, "{gate}, using conflict pools");
            return Self::assign_conflict_day(grid, config, snapshot, ledger, col, gate, rng);
        }

        let headcount = operative_count(&*grid, col);
        let Some(plan) = config.plan_for(headcount) else {
            debug!(day = %day, headcount, "headcount too low, skipping");
            return skipped(SimpleSkip::LowHeadcount { headcount });
        };
        debug!(day = %day, headcount, plan = plan.name(), "plan selected");

        let mut pool = filter.available(&config.eligible_workers, col);
        let available = pool.len();
        if available < plan.len() {
            warn!(
                day = %day,
                headcount,
                available,
                required = plan.len(),
                "not enough available workers"
            );
            return skipped(SimpleSkip::InsufficientAvailability {
                headcount,
                available,
                required: plan.len(),
                verdicts: filter.explain_all(&config.eligible_workers, col),
            });
        }

        let assignments = fill(grid, ledger, col, plan, &mut pool, rng);
        if assignments.is_empty() {
            return skipped(SimpleSkip::AlreadyCovered { headcount });
        }
        SimpleDay::Assigned {
            column: col,
            day,
            headcount,
            available,
            assignments,
        }
    }

    /// Two-phase fill for a day holding a conflict marker.
    ///
    /// The first phase draws from the preferred pool when any of it is
    /// free, otherwise from the alternate pool. The second phase sees the
    /// grid as the first phase left it.
    fn assign_conflict_day<G: RosterGrid + ?Sized, R: Rng + ?Sized>(
        grid: &mut G,
        config: &SimpleConfig,
        snapshot: &Snapshot,
        ledger: &mut FairnessLedger,
        col: usize,
        gate: DayGate,
        rng: &mut R,
    ) -> SimpleDay {
        let filter = SimpleFilter::new(&*grid, snapshot);
        let preferred = filter.available(&config.preferred_conflict, col);
        let (pool_choice, mut pool) = if preferred.is_empty() {
            (
                PoolChoice::Alternate,
                filter.available(&config.alternate_conflict, col),
            )
        } else {
            (PoolChoice::Preferred, preferred)
        };
        let mut assignments = fill(grid, ledger, col, CONFLICT_FIRST_PHASE, &mut pool, rng);

        let mut second = SimpleFilter::new(&*grid, snapshot).available(&config.second_conflict, col);
        assignments.extend(fill(grid, ledger, col, CONFLICT_SECOND_PHASE, &mut second, rng));

        SimpleDay::Conflict {
            column: col,
            day: grid.day_label(col),
            gate,
            pool: pool_choice,
            assignments,
        }
    }

    fn equity<G: RosterGrid + ?Sized>(
        grid: &G,
        config: &SimpleConfig,
        ledger: &FairnessLedger,
    ) -> Vec<EquityRow> {
        let workers: BTreeSet<String> = config
            .eligible_workers
            .iter()
            .chain(&config.preferred_conflict)
            .chain(&config.alternate_conflict)
            .chain(&config.second_conflict)
            .map(|w| w.trim().to_uppercase())
            .collect();
        workers
            .iter()
            .filter(|w| grid.worker_row(w).is_some())
            .filter_map(|w| EquityRow::from_ledger(w, ledger))
            .collect()
    }
}

/// Places each code of `codes` not yet present on the day, taking the
/// fairest worker from `pool` and removing them from it.
fn fill<G: RosterGrid + ?Sized, R: Rng + ?Sized>(
    grid: &mut G,
    ledger: &mut FairnessLedger,
    col: usize,
    codes: CodeSet,
    pool: &mut Vec<(String, usize)>,
    rng: &mut R,
) -> Vec<Assignment> {
    let mut assignments = Vec::new();
    for &code in codes.codes() {
        if grid.day_holds(col, code) {
            debug!(set = codes.name(), %code, col, "already present");
            continue;
        }
        let names: Vec<String> = pool.iter().map(|(w, _)| w.clone()).collect();
        let Some(worker) = EquitySelector::for_code(code).select(&names, ledger, rng) else {
            continue;
        };
        let Some(index) = pool.iter().position(|(w, _)| *w == worker) else {
            continue;
        };
        let (worker, row) = pool.remove(index);
        debug!(set = codes.name(), %code, worker = %worker, "picked");
        assignments.push(commit(grid, ledger, row, col, &worker, code));
    }
    assignments
}
