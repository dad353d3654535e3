//! Roster grid data contract and its in-memory implementation.
//!
//! The assignment engines only ever talk to a [`RosterGrid`]: read a cell,
//! write a cell, look up a labelled aggregate row. Row 1 holds day labels,
//! column 1 holds worker identifiers, and day columns start at
//! [`FIRST_DAY_COLUMN`]. All indices are 1-based, like the spreadsheets the
//! rosters come from.
//!
//! # Key Types
//!
//! - [`RosterGrid`]: The cell-level contract consumed by the engines
//! - [`Sheet`]: Dense in-memory grid
//! - [`Workbook`]: A schedule sheet plus its derived statistics, persisted as JSON
//! - [`StatsTable`]: Per-worker code-family totals computed from a grid

mod error;
mod headcount;
mod sheet;
mod stats;
mod types;
mod workbook;

pub use error::GridError;
pub use headcount::{operative_count, refresh_operative_row, OPERATIVE_LABEL, TOWER_LABEL};
pub use sheet::{Sheet, WorkerBand};
pub use stats::{StatsRow, StatsTable};
pub use types::{RosterGrid, FIRST_DAY_COLUMN};
pub use workbook::{alternate_path, resolve_input, Workbook};
