//! Extra-hour engine: one `1T` or `7` per day.
//!
//! # Algorithm
//!
//! For each day column, in order:
//!
//! 1. Read the operative headcount: ≤8 → nothing, 9 → `7`, ≥10 → `1T`
//! 2. Skip the day if an exclusive code (1T, 7, BLPTD, BANTD) is present
//! 3. Filter workers by today's cell and hard constraints on yesterday and
//!    tomorrow, plus the tower capacity limit for one worker on `1T` days
//! 4. Partition survivors into priority tiers from yesterday's code
//! 5. Pick from the best non-empty tier by fairness counters, then at random
//! 6. Commit the code and bump the counters
//!
//! A skipped day leaves the grid untouched and is recorded in the
//! [`ExtraReport`] with its reason.

mod config;
mod eligibility;
mod report;
mod runner;
mod tiering;

pub use config::ExtraConfig;
pub use eligibility::ExtraFilter;
pub use report::{ExtraDay, ExtraReport, ExtraSkip};
pub use runner::ExtraRunner;
pub use tiering::{partition, tier_of, Tier};
