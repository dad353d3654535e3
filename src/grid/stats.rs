//! Per-worker statistics derived from a grid.

use serde::{Deserialize, Serialize};

use super::types::RosterGrid;
use crate::code::ShiftCode;

/// Totals for one worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsRow {
    pub worker: String,
    /// DESC + TROP
    pub rest: u32,
    /// 1T + 7
    pub extra: u32,
    /// 7 only
    pub six_hour: u32,
    /// BANTD + BLPTD
    pub one_day: u32,
    /// 3 + 3D
    pub three_day: u32,
    /// NLPTD + NLPRD + NANTD + NANRD
    pub six_day: u32,
}

/// The statistics sheet: one row per worker, in grid order.
///
/// Always recomputed from cell contents, never from in-run counters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatsTable {
    pub rows: Vec<StatsRow>,
}

impl StatsTable {
    /// Column headers in sheet order.
    pub const HEADERS: [&'static str; 7] = ["SIGLA", "DESC", "1T", "6RT", "1D", "3D", "6D"];

    pub fn from_grid<G: RosterGrid + ?Sized>(grid: &G) -> Self {
        let rows = grid
            .worker_rows()
            .filter_map(|row| {
                let worker = grid.cell(row, 1)?.to_string();
                let mut stats = StatsRow {
                    worker,
                    rest: 0,
                    extra: 0,
                    six_hour: 0,
                    one_day: 0,
                    three_day: 0,
                    six_day: 0,
                };
                for code in grid.day_columns().filter_map(|col| grid.code(row, col)) {
                    use ShiftCode::*;
                    match code {
                        Desc | Trop => stats.rest += 1,
                        OneT => stats.extra += 1,
                        Seven => {
                            stats.extra += 1;
                            stats.six_hour += 1;
                        }
                        Bantd | Blptd => stats.one_day += 1,
                        Three | ThreeD => stats.three_day += 1,
                        Nlptd | Nlprd | Nantd | Nanrd => stats.six_day += 1,
                        _ => {}
                    }
                }
                Some(stats)
            })
            .collect();
        Self { rows }
    }

    pub fn row(&self, worker: &str) -> Option<&StatsRow> {
        self.rows
            .iter()
            .find(|r| r.worker.eq_ignore_ascii_case(worker.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Sheet;

    #[test]
    fn test_counts_by_family() {
        let sheet = Sheet::from_rows(
            "S",
            [
                vec!["SIGLA", "1", "2", "3", "4", "5", "6"],
                vec!["GCE", "DESC", "7", "1T", "TROP", "3D", "nanrd"],
                vec!["YIS", "BANTD", "BLPTD", "3", "", "SIND", "MANR"],
                vec!["", "7", "7", "", "", "", ""],
            ],
        )
        .with_worker_band(2, 4);

        let table = StatsTable::from_grid(&sheet);
        assert_eq!(table.rows.len(), 2);

        let gce = table.row("gce").unwrap();
        assert_eq!(gce.rest, 2);
        assert_eq!(gce.extra, 2);
        assert_eq!(gce.six_hour, 1);
        assert_eq!(gce.six_day, 1);
        assert_eq!(gce.three_day, 1);

        let yis = table.row("YIS").unwrap();
        assert_eq!(yis.one_day, 2);
        assert_eq!(yis.three_day, 1);
        assert_eq!(yis.rest, 0);
        assert_eq!(yis.extra, 0);
    }
}
