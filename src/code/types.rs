//! The shift code enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when text does not name a known [`ShiftCode`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown shift code: {0:?}")]
pub struct UnknownCode(pub String);

/// A roster shift code referenced by the assignment rules.
///
/// Parsing trims surrounding whitespace and ignores case, so `" 1t "`
/// and `"1T"` are the same code.
///
/// # Examples
///
/// ```
/// use u_rosterfill::code::ShiftCode;
///
/// assert_eq!(ShiftCode::parse(" desc "), Some(ShiftCode::Desc));
/// assert_eq!(ShiftCode::parse("7"), Some(ShiftCode::Seven));
/// assert_eq!(ShiftCode::parse("M"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ShiftCode {
    // Rest and leave
    Desc,
    Trop,
    Sind,
    Vaca,
    // Long duties
    Bantd,
    Blptd,
    Nlprd,
    Nanrd,
    Nantd,
    Nlptd,
    Three,
    ThreeD,
    // Extra hours
    OneT,
    Seven,
    // Simplified shifts
    Manr,
    Tanr,
    Masr,
    Tasr,
    Asig,
    // Conflict-day shifts
    Mlpr,
    Tlpr,
    Tlpt,
    Tant,
    Mast,
}

impl ShiftCode {
    /// Every code in declaration order.
    pub const ALL: [ShiftCode; 24] = [
        ShiftCode::Desc,
        ShiftCode::Trop,
        ShiftCode::Sind,
        ShiftCode::Vaca,
        ShiftCode::Bantd,
        ShiftCode::Blptd,
        ShiftCode::Nlprd,
        ShiftCode::Nanrd,
        ShiftCode::Nantd,
        ShiftCode::Nlptd,
        ShiftCode::Three,
        ShiftCode::ThreeD,
        ShiftCode::OneT,
        ShiftCode::Seven,
        ShiftCode::Manr,
        ShiftCode::Tanr,
        ShiftCode::Masr,
        ShiftCode::Tasr,
        ShiftCode::Asig,
        ShiftCode::Mlpr,
        ShiftCode::Tlpr,
        ShiftCode::Tlpt,
        ShiftCode::Tant,
        ShiftCode::Mast,
    ];

    /// Canonical cell text for this code.
    pub fn as_str(self) -> &'static str {
        match self {
            ShiftCode::Desc => "DESC",
            ShiftCode::Trop => "TROP",
            ShiftCode::Sind => "SIND",
            ShiftCode::Vaca => "VACA",
            ShiftCode::Bantd => "BANTD",
            ShiftCode::Blptd => "BLPTD",
            ShiftCode::Nlprd => "NLPRD",
            ShiftCode::Nanrd => "NANRD",
            ShiftCode::Nantd => "NANTD",
            ShiftCode::Nlptd => "NLPTD",
            ShiftCode::Three => "3",
            ShiftCode::ThreeD => "3D",
            ShiftCode::OneT => "1T",
            ShiftCode::Seven => "7",
            ShiftCode::Manr => "MANR",
            ShiftCode::Tanr => "TANR",
            ShiftCode::Masr => "MASR",
            ShiftCode::Tasr => "TASR",
            ShiftCode::Asig => "ASIG",
            ShiftCode::Mlpr => "MLPR",
            ShiftCode::Tlpr => "TLPR",
            ShiftCode::Tlpt => "TLPT",
            ShiftCode::Tant => "TANT",
            ShiftCode::Mast => "MAST",
        }
    }

    /// Parses cell text, returning `None` for text outside the vocabulary.
    pub fn parse(text: &str) -> Option<ShiftCode> {
        let text = text.trim();
        ShiftCode::ALL
            .into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(text))
    }

    /// True for the single-purpose codes balanced by their own counter.
    pub fn is_single_purpose(self) -> bool {
        matches!(
            self,
            ShiftCode::Manr
                | ShiftCode::Tanr
                | ShiftCode::Masr
                | ShiftCode::Tasr
                | ShiftCode::Asig
                | ShiftCode::Mlpr
                | ShiftCode::Tlpr
                | ShiftCode::Tlpt
                | ShiftCode::Tant
                | ShiftCode::Mast
        )
    }
}

impl fmt::Display for ShiftCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShiftCode {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShiftCode::parse(s).ok_or_else(|| UnknownCode(s.to_string()))
    }
}

impl TryFrom<String> for ShiftCode {
    type Error = UnknownCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ShiftCode> for String {
    fn from(code: ShiftCode) -> Self {
        code.as_str().to_string()
    }
}
