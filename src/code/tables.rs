//! Membership tables consulted by the assignment rules.

use super::types::ShiftCode;
use ShiftCode::*;

/// A static set of codes backing one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeSet {
    name: &'static str,
    codes: &'static [ShiftCode],
}

impl CodeSet {
    pub const fn new(name: &'static str, codes: &'static [ShiftCode]) -> Self {
        Self { name, codes }
    }

    /// Returns the rule name used in diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn contains(&self, code: ShiftCode) -> bool {
        self.codes.contains(&code)
    }

    /// Parses `text` and returns the code when it belongs to this set.
    pub fn matches(&self, text: &str) -> Option<ShiftCode> {
        ShiftCode::parse(text).filter(|code| self.contains(*code))
    }

    pub fn codes(&self) -> &'static [ShiftCode] {
        self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Rest-class codes; having one yesterday raises priority.
pub const REST: CodeSet = CodeSet::new("rest", &[Desc, Trop, Sind]);

/// Extra-hour codes, balanced jointly.
pub const EXTRA: CodeSet = CodeSet::new("extra", &[OneT, Seven]);

/// Yesterday codes that forbid an extra-hour assignment today.
pub const HARD_BEFORE: CodeSet =
    CodeSet::new("hard-yesterday", &[Bantd, Blptd, Nlprd, Nanrd, OneT, Seven]);

/// Tomorrow codes that forbid an extra-hour assignment today.
pub const HARD_AFTER: CodeSet = CodeSet::new("hard-tomorrow", &[Bantd, Blptd, OneT, Seven]);

/// Yesterday codes that lower priority without excluding.
pub const SOFT_BEFORE: CodeSet = CodeSet::new("soft-yesterday", &[Nantd, Nlptd]);

/// At most one of these may exist per day.
pub const EXCLUSIVE: CodeSet = CodeSet::new("exclusive", &[OneT, Seven, Blptd, Bantd]);

/// Markers that route a day to the conflict path of the simple-shift engine.
pub const CONFLICT_MARKERS: CodeSet = CodeSet::new("conflict", &[Blptd, Nanrd]);

/// Codes filled on an 11-headcount day.
pub const SIMPLE_ELEVEN: CodeSet = CodeSet::new("headcount-11", &[Manr, Tanr]);

/// Codes filled on a 12-headcount day.
pub const SIMPLE_TWELVE: CodeSet = CodeSet::new("headcount-12", &[Manr, Tanr, Masr, Tasr]);

/// Codes filled on a day with 13 or more on duty.
pub const SIMPLE_THIRTEEN: CodeSet =
    CodeSet::new("headcount-13", &[Manr, Tanr, Masr, Tasr, Asig]);

/// First phase of a conflict day.
pub const CONFLICT_FIRST_PHASE: CodeSet = CodeSet::new("conflict-first", &[Mlpr, Tlpr, Tlpt]);

/// Second phase of a conflict day.
pub const CONFLICT_SECOND_PHASE: CodeSet =
    CodeSet::new("conflict-second", &[Manr, Tanr, Tant, Mast, Masr, Tasr]);

/// Cell texts that take a worker off the operative headcount.
///
/// Kept as text because most of these never drive an assignment rule.
pub const NON_OPERATIVE: &[&str] = &[
    "DESC", "TROP", "VACA", "COME", "COMT", "COMS", "SIND", "CMED", "CERT", "LICR", "CAPA", "MCAE",
    "TCAE", "MCHC", "TCHC", "NCHC", "ACHC", "MENT", "TENT", "NENT", "AENT", "MINS", "TINS", "NINS",
    "AINS", "MCOR", "TCOR", "MSMS", "TSMS", "MDBM", "TDBM", "MDOC", "TDOC", "MPRO", "TPRO", "MATF",
    "TATF", "MGST", "TGST", "MOFI", "TOFI", "CET", "ATC", "KATC", "XATC", "YATC", "ZATC", "X", "MN",
    "TN", "MS", "TS", "N", "S",
];
