//! Simplified-shift engine: MANR, TANR, MASR, TASR and ASIG by headcount.
//!
//! # Algorithm
//!
//! Before the loop the engine snapshots which worker cells are filled and
//! rewrites the operative headcount row. Then, for each day column:
//!
//! 1. A conflict marker (BLPTD or NANRD) sends the day down the conflict
//!    path: MLPR/TLPR/TLPT from the preferred pool (or the alternate pool
//!    when nobody preferred is free), then MANR/TANR/TANT/MAST/MASR/TASR
//!    from the second pool
//! 2. Otherwise the headcount picks the codes: 11 → two, 12 → four,
//!    13 or more → five; 10 or fewer → nothing
//! 3. The day is skipped unless at least as many workers are available
//!    as there are codes
//! 4. Each code not yet on the day goes to the worker with the fewest of
//!    that code, at random among ties, who then leaves the pool
//!
//! A worker is available when their cell is blank and was blank in the
//! snapshot.

mod config;
mod eligibility;
mod report;
mod runner;

pub use config::SimpleConfig;
pub use eligibility::{SimpleFilter, Snapshot};
pub use report::{EquityRow, PoolChoice, SimpleDay, SimpleReport, SimpleSkip};
pub use runner::SimpleRunner;
