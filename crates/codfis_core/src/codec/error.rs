//! Codec error types.

use crate::places::directory::PlaceDataError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type EncodeResult<T> = Result<T, EncodeError>;
pub type ParseResult<T> = Result<T, ParseError>;

/// Encoding failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// A required attribute is blank.
    MissingField(&'static str),
    /// No municipality or country matches the birthplace.
    PlaceNotFound(String),
    /// Birthdate text is not a calendar date.
    InvalidBirthdate(String),
    InvalidGender(String),
}

impl EncodeError {
    /// Returns whether this is a missing-data failure (absent attribute or
    /// unresolvable birthplace).
    pub fn is_missing_data(&self) -> bool {
        matches!(self, Self::MissingField(_) | Self::PlaceNotFound(_))
    }
}

impl Display for EncodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "missing {field} value"),
            Self::PlaceNotFound(value) => write!(f, "no code found for {value}"),
            Self::InvalidBirthdate(value) => write!(f, "{value} is not a valid date"),
            Self::InvalidGender(value) => {
                write!(f, "gender is invalid: {value} (expected M or F)")
            }
        }
    }
}

impl Error for EncodeError {}

/// Decoding failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input does not match the fixed tax code grammar.
    Malformed(String),
    /// Embedded place code is not a known municipality.
    UnknownPlaceCode(String),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(value) => write!(f, "tax code is malformed: `{value}`"),
            Self::UnknownPlaceCode(code) => write!(f, "no place found for code {code}"),
        }
    }
}

impl Error for ParseError {}

/// Crate-level error for callers handling every failure in one place.
#[derive(Debug)]
pub enum CodecError {
    Encode(EncodeError),
    Parse(ParseError),
    PlaceData(PlaceDataError),
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode(err) => write!(f, "{err}"),
            Self::Parse(err) => write!(f, "{err}"),
            Self::PlaceData(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encode(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::PlaceData(err) => Some(err),
        }
    }
}

impl From<EncodeError> for CodecError {
    fn from(value: EncodeError) -> Self {
        Self::Encode(value)
    }
}

impl From<ParseError> for CodecError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<PlaceDataError> for CodecError {
    fn from(value: PlaceDataError) -> Self {
        Self::PlaceData(value)
    }
}
