//! Shift code vocabulary.
//!
//! Every rule in the assignment engines is expressed over the closed
//! [`ShiftCode`] enumeration and a handful of named [`CodeSet`] membership
//! tables. Cell text that is not part of the vocabulary is still an
//! occupied cell, it simply never matches a rule.
//!
//! # Key Types
//!
//! - [`ShiftCode`]: A roster code, parsed trimmed and case-insensitively
//! - [`CodeSet`]: A named, static set of codes used by one rule

mod tables;
mod types;

pub use tables::{
    CodeSet, CONFLICT_FIRST_PHASE, CONFLICT_MARKERS, CONFLICT_SECOND_PHASE, EXCLUSIVE, EXTRA,
    HARD_AFTER, HARD_BEFORE, NON_OPERATIVE, REST, SIMPLE_ELEVEN, SIMPLE_THIRTEEN, SIMPLE_TWELVE,
    SOFT_BEFORE,
};
pub use types::{ShiftCode, UnknownCode};
