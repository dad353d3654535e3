//! End-to-end scenarios for the extra-hour engine.

use u_rosterfill::code::{ShiftCode, EXCLUSIVE, EXTRA};
use u_rosterfill::extra::{ExtraConfig, ExtraDay, ExtraRunner, ExtraSkip};
use u_rosterfill::fairness::{FairnessGroup, FairnessLedger};
use u_rosterfill::grid::{RosterGrid, Sheet, Workbook};

const WORKERS: [&str; 7] = ["GCE", "YIS", "MAQ", "DJO", "AFG", "JLF", "JMV"];

/// A month of `days` blank columns for the default workers, with the
/// headcount and tower rows below the band.
fn month(days: usize, headcount: &[i64], tower: &[i64]) -> Sheet {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut header = vec!["SIGLA".to_string()];
    header.extend((1..=days).map(|d| format!("D{d}")));
    rows.push(header);
    for w in WORKERS {
        let mut row = vec![w.to_string()];
        row.extend((0..days).map(|_| String::new()));
        rows.push(row);
    }
    let aggregate = |label: &str, values: &[i64]| {
        let mut row = vec![label.to_string()];
        row.extend((0..days).map(|d| values.get(d).map(i64::to_string).unwrap_or_default()));
        row
    };
    rows.push(aggregate("TURNOS OPERATIVOS", headcount));
    rows.push(aggregate("Torre", tower));
    Sheet::from_rows("Horario", rows).with_worker_band(2, WORKERS.len() + 1)
}

fn extras_on(sheet: &Sheet, col: usize) -> usize {
    sheet
        .worker_rows()
        .filter(|&row| sheet.cell(row, col).and_then(|t| EXTRA.matches(t)).is_some())
        .count()
}

#[test]
fn test_seven_goes_to_worker_with_fewer_extras() {
    let mut sheet = month(6, &[0, 0, 0, 9, 0, 0], &[]);
    // YIS already carries two extras, none adjacent to day 4
    sheet.set_cell(3, 2, "1T");
    sheet.set_cell(3, 7, "7");
    let config = ExtraConfig::default().with_workers(["GCE", "YIS"]).with_seed(11);
    let report = ExtraRunner::run(&mut sheet, &config).unwrap();

    assert_eq!(report.assigned_count(), 1);
    let a = report.assignments().next().unwrap();
    assert_eq!(a.code, ShiftCode::Seven);
    assert_eq!(a.worker, "GCE");
    assert_eq!(a.column, 5);
    assert_eq!(sheet.cell(2, 5), Some("7"));
}

#[test]
fn test_only_candidate_hard_excluded_leaves_day_open() {
    let mut sheet = month(2, &[0, 10], &[]);
    let config = ExtraConfig::default().with_workers(["MAQ"]).with_seed(1);
    sheet.set_cell(4, 2, "BLPTD");
    let report = ExtraRunner::run(&mut sheet, &config).unwrap();

    assert_eq!(report.assigned_count(), 0);
    assert_eq!(sheet.cell(4, 3), None);
    let (column, _, reason) = report.unassigned().next().unwrap();
    assert_eq!(column, 3);
    assert!(matches!(reason, ExtraSkip::NoCandidates { target: ShiftCode::OneT, .. }));
    assert!(report.to_string().contains("Worker restrictions (1 days)"));
}

#[test]
fn test_day_with_one_t_gets_nothing() {
    let mut sheet = month(3, &[10, 10, 10], &[]);
    sheet.set_cell(5, 3, "1T");
    let before = sheet.cell(5, 3).map(String::from);
    let report = ExtraRunner::run(&mut sheet, &ExtraConfig::default().with_seed(3)).unwrap();

    assert_eq!(extras_on(&sheet, 3), 1);
    assert_eq!(sheet.cell(5, 3).map(String::from), before);
    assert!(matches!(
        report.day(3),
        Some(ExtraDay::Skipped {
            reason: ExtraSkip::ExclusivePresent { .. },
            ..
        })
    ));
}

#[test]
fn test_low_headcount_days_untouched() {
    let mut sheet = month(4, &[8, 3, 0, 8], &[]);
    let before = sheet.clone();
    let report = ExtraRunner::run(&mut sheet, &ExtraConfig::default().with_seed(5)).unwrap();
    assert_eq!(report.assigned_count(), 0);
    assert_eq!(sheet, before);
}

#[test]
fn test_tower_worker_skipped_on_busy_tower_days() {
    let mut sheet = month(1, &[10], &[4]);
    let config = ExtraConfig::default().with_workers(["GCE"]).with_seed(9);
    let report = ExtraRunner::run(&mut sheet, &config).unwrap();
    assert_eq!(report.assigned_count(), 0);

    let mut sheet = month(1, &[10], &[3]);
    let report = ExtraRunner::run(&mut sheet, &config).unwrap();
    assert_eq!(report.assigned_count(), 1);
    assert_eq!(sheet.cell(2, 2), Some("1T"));
}

#[test]
fn test_full_month_invariants() {
    let headcount: Vec<i64> = (0..30).map(|d| [8, 9, 10, 11][d % 4]).collect();
    let mut sheet = month(30, &headcount, &[]);
    // some pre-existing duties
    sheet.set_cell(2, 5, "DESC");
    sheet.set_cell(3, 10, "NANTD");
    sheet.set_cell(4, 12, "BANTD");
    let before = sheet.clone();
    let report = ExtraRunner::run(&mut sheet, &ExtraConfig::default().with_seed(2024)).unwrap();

    for col in sheet.day_columns() {
        let exclusive = sheet
            .worker_rows()
            .filter(|&row| sheet.cell(row, col).and_then(|t| EXCLUSIVE.matches(t)).is_some())
            .count();
        assert!(exclusive <= 1, "day {col} has {exclusive} exclusive codes");
        for row in sheet.worker_rows() {
            if before.cell(row, col) != sheet.cell(row, col) {
                assert_eq!(before.cell(row, col), None);
            }
        }
    }

    let ledger = FairnessLedger::scan(&sheet);
    assert_eq!(report.ledger, ledger);
    for (row, worker) in sheet.workers() {
        let cells = sheet
            .day_columns()
            .filter(|&col| sheet.cell(row, col).and_then(|t| EXTRA.matches(t)).is_some())
            .count() as u32;
        assert_eq!(ledger.count(&worker, FairnessGroup::AnyExtra), cells);
    }
    assert!(report.assigned_count() > 0);
}

#[test]
fn test_same_seed_same_result() {
    let headcount = vec![10; 20];
    let run = |seed| {
        let mut sheet = month(20, &headcount, &[]);
        ExtraRunner::run(&mut sheet, &ExtraConfig::default().with_seed(seed)).unwrap();
        sheet
    };
    assert_eq!(run(77), run(77));
}

#[test]
fn test_workbook_round_trip_with_statistics() {
    let dir = std::env::temp_dir().join(format!("u-rosterfill-extra-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let input = dir.join("input.json");
    Workbook::new(month(3, &[9, 10, 10], &[])).save(&input).unwrap();

    let mut workbook = Workbook::load(&input).unwrap();
    ExtraRunner::run(&mut workbook.schedule, &ExtraConfig::default().with_seed(4)).unwrap();
    workbook.refresh_statistics();
    let written = workbook.save(dir.join("output.json")).unwrap();

    let reloaded = Workbook::load(&written).unwrap();
    let stats = reloaded.statistics.expect("statistics written");
    let extras: u32 = stats.rows.iter().map(|r| r.extra).sum();
    let sevens: u32 = stats.rows.iter().map(|r| r.six_hour).sum();
    assert_eq!(extras, 3);
    assert_eq!(sevens, 1);
    std::fs::remove_dir_all(&dir).ok();
}
