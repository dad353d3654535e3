//! Operative headcount aggregate.

use tracing::{debug, warn};

use super::types::RosterGrid;
use crate::code::NON_OPERATIVE;

/// Label of the per-day operative headcount row.
pub const OPERATIVE_LABEL: &str = "TURNOS OPERATIVOS";

/// Label of the per-day tower capacity row.
pub const TOWER_LABEL: &str = "Torre";

/// Counts workers on duty for a day.
///
/// A worker is operative when the cell is blank or holds anything outside
/// [`NON_OPERATIVE`].
pub fn operative_count<G: RosterGrid + ?Sized>(grid: &G, col: usize) -> i64 {
    grid.worker_rows()
        .filter(|&row| match grid.cell(row, col) {
            None => true,
            Some(text) => !NON_OPERATIVE
                .iter()
                .any(|code| code.eq_ignore_ascii_case(text)),
        })
        .count() as i64
}

/// Rewrites the headcount row with freshly computed counts.
///
/// Returns the row that was updated, or `None` when the grid has no
/// [`OPERATIVE_LABEL`] row.
pub fn refresh_operative_row<G: RosterGrid + ?Sized>(grid: &mut G) -> Option<usize> {
    let Some(row) = grid.label_row(OPERATIVE_LABEL) else {
        warn!("no '{OPERATIVE_LABEL}' row found, headcount not refreshed");
        return None;
    };
    for col in grid.day_columns() {
        let count = operative_count(&*grid, col);
        grid.set_cell(row, col, &count.to_string());
    }
    debug!(row, "operative headcount row refreshed");
    Some(row)
}
