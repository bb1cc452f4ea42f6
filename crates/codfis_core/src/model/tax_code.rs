//! Decoded tax code shapes.
//!
//! # Invariants
//! - `BirthDate` is partial: the century is inferred during decoding.
//! - `DecodedTaxCode::omocodes` always starts with the canonical code.

use crate::model::person::Gender;
use crate::model::place::PlaceRecord;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use time::{Date, Month};

/// Length of a complete tax code.
pub const TAX_CODE_LEN: usize = 16;
/// Length of the body covered by the check character.
pub const BODY_LEN: usize = 15;

/// Year, month and day recovered from a tax code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl BirthDate {
    /// Converts to a calendar date, `None` when the day does not exist.
    pub fn to_date(self) -> Option<Date> {
        let month = Month::try_from(self.month).ok()?;
        Date::from_calendar_date(self.year, month, self.day).ok()
    }
}

impl Display for BirthDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month, self.day)
    }
}

/// Unparsed capture groups of a tax code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTaxCode {
    pub surname: String,
    pub name: String,
    pub birthdate: String,
    pub birthdate_year: String,
    pub birthdate_month: String,
    pub birthdate_day: String,
    pub birthplace: String,
    pub cin: String,
}

/// Attributes recovered from a tax code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedTaxCode {
    /// Input code, upper-cased.
    pub code: String,
    pub gender: Gender,
    pub birthdate: BirthDate,
    /// Resolved place with the soppresso marker stripped.
    pub birthplace: PlaceRecord,
    /// Canonical code followed by seven progressively substituted variants.
    pub omocodes: Vec<String>,
    pub raw: RawTaxCode,
}
