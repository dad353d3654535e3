//! The single mutating step of a decision.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use super::types::Assignment;
use crate::code::ShiftCode;
use crate::fairness::FairnessLedger;
use crate::grid::RosterGrid;

/// Writes `code` for `worker` and updates the ledger.
///
/// Callers must have checked that the cell is blank; this is the last step
/// of a successful decision and nothing before it mutates state.
pub fn commit<G: RosterGrid + ?Sized>(
    grid: &mut G,
    ledger: &mut FairnessLedger,
    row: usize,
    col: usize,
    worker: &str,
    code: ShiftCode,
) -> Assignment {
    debug_assert!(grid.is_blank(row, col), "commit into occupied cell");
    grid.set_cell(row, col, code.as_str());
    ledger.record(worker, code);

    let day = grid.day_label(col);
    info!(%code, worker, day = %day, "assigned");
    Assignment {
        column: col,
        day,
        worker: worker.to_string(),
        code,
    }
}

/// Seeded RNG when a seed is given, otherwise seeded from entropy.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::seed_from_u64(rand::random()),
    }
}
