//! Fairness bookkeeping.
//!
//! A [`FairnessLedger`] holds, per worker, how many codes of each
//! [`FairnessGroup`] they already carry. It is derived by a pure scan of the
//! grid before a run and then updated on every commit, so it always matches
//! the grid's contents.

mod ledger;

pub use ledger::{FairnessGroup, FairnessLedger};
