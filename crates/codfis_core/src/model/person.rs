//! Personal attributes used to derive a tax code.
//!
//! # Responsibility
//! - Carry the five required inputs of encoding.
//! - Resolve birthdate input shape once, at construction time.
//!
//! # Invariants
//! - `Gender` has exactly two variants serialized as `"M"` and `"F"`.
//! - Text birthdates are parsed by [`BirthdateInput::resolve`] only.

use crate::codec::error::{EncodeError, EncodeResult};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use time::{Date, Month};

/// Gender component of a tax code.
///
/// Female codes add 40 to the day of birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    /// Parses `m`/`f` in any case, ignoring surrounding whitespace.
    ///
    /// # Errors
    /// - `MissingField("gender")` when `value` is blank.
    /// - `InvalidGender` for any other value.
    pub fn parse(value: &str) -> EncodeResult<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "" => Err(EncodeError::MissingField("gender")),
            "M" => Ok(Self::Male),
            "F" => Ok(Self::Female),
            other => Err(EncodeError::InvalidGender(other.to_string())),
        }
    }

    /// Single-letter form used in decoded output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }

    /// Offset added to the day of birth.
    pub(crate) fn day_offset(self) -> u8 {
        match self {
            Self::Male => 0,
            Self::Female => 40,
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Birthdate as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BirthdateInput {
    /// Already a calendar date.
    Date(Date),
    /// Raw text, parsed during encoder construction.
    Text(String),
}

impl BirthdateInput {
    /// Returns whether the input carries no usable value.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Date(_) => false,
            Self::Text(text) => text.trim().is_empty(),
        }
    }

    /// Resolves the input into a calendar date.
    ///
    /// Text accepts `YYYY-MM-DD` or day-first `DD/MM/YYYY` (`/`, `-` or `.`
    /// separated).
    ///
    /// # Errors
    /// - `MissingField("birthdate")` for blank text.
    /// - `InvalidBirthdate` when the text is not a real calendar date.
    pub fn resolve(&self) -> EncodeResult<Date> {
        match self {
            Self::Date(date) => Ok(*date),
            Self::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Err(EncodeError::MissingField("birthdate"));
                }
                parse_date_text(trimmed)
                    .ok_or_else(|| EncodeError::InvalidBirthdate(trimmed.to_string()))
            }
        }
    }
}

impl From<Date> for BirthdateInput {
    fn from(value: Date) -> Self {
        Self::Date(value)
    }
}

impl From<&str> for BirthdateInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for BirthdateInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Input record for encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalData {
    pub surname: String,
    pub name: String,
    pub gender: Gender,
    pub birthdate: BirthdateInput,
    /// Place name or place code (`F205`) of birth.
    pub birthplace: String,
}

impl PersonalData {
    pub fn new(
        surname: impl Into<String>,
        name: impl Into<String>,
        gender: Gender,
        birthdate: impl Into<BirthdateInput>,
        birthplace: impl Into<String>,
    ) -> Self {
        Self {
            surname: surname.into(),
            name: name.into(),
            gender,
            birthdate: birthdate.into(),
            birthplace: birthplace.into(),
        }
    }

    /// Checks that every text attribute is present.
    ///
    /// Fields are checked in declaration order; the first blank one is reported.
    pub fn validate_presence(&self) -> EncodeResult<()> {
        if self.surname.trim().is_empty() {
            return Err(EncodeError::MissingField("surname"));
        }
        if self.name.trim().is_empty() {
            return Err(EncodeError::MissingField("name"));
        }
        if self.birthdate.is_blank() {
            return Err(EncodeError::MissingField("birthdate"));
        }
        if self.birthplace.trim().is_empty() {
            return Err(EncodeError::MissingField("birthplace"));
        }
        Ok(())
    }
}

fn parse_date_text(value: &str) -> Option<Date> {
    let parts: Vec<&str> = value.split(['-', '/', '.']).collect();
    if parts.len() != 3 || parts.iter().any(|part| part.is_empty()) {
        return None;
    }
    if !parts
        .iter()
        .all(|part| part.chars().all(|c| c.is_ascii_digit()))
    {
        return None;
    }

    let (year, month, day) = if parts[0].len() == 4 {
        (parts[0], parts[1], parts[2])
    } else if parts[2].len() == 4 {
        (parts[2], parts[1], parts[0])
    } else {
        return None;
    };

    let year: i32 = year.parse().ok()?;
    let month: u8 = month.parse().ok()?;
    let day: u8 = day.parse().ok()?;
    let month = Month::try_from(month).ok()?;
    Date::from_calendar_date(year, month, day).ok()
}
