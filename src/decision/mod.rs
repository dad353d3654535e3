//! Building blocks shared by the day decision loops.
//!
//! Both engines report the same kinds of per-worker rejections and day
//! gates, commit through the same single write-and-count step, and draw
//! their tie-breaks from a seedable RNG.

mod commit;
mod types;

pub use commit::{commit, create_rng};
pub use types::{check_pool, Assignment, ConfigError, DayGate, Rejection, SoftSignal, WorkerVerdict};
