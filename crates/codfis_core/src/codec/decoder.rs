//! Tax code to personal attributes.
//!
//! # Responsibility
//! - Validate the fixed 16-character grammar.
//! - Recover gender, birthdate, birthplace and omocode variants.
//!
//! # Invariants
//! - A decoded birth year is never later than the reference date's year.
//! - The check character is not re-validated beyond the grammar match.

use crate::codec::checksum::check_char;
use crate::codec::error::{ParseError, ParseResult};
use crate::codec::months::month_number;
use crate::codec::omocodia::{decode_char, encode_char, OMOCODABLE_INDEXES};
use crate::model::person::Gender;
use crate::model::place::PlaceRecord;
use crate::model::tax_code::{BirthDate, DecodedTaxCode, RawTaxCode, BODY_LEN};
use crate::places::directory::PlaceDirectory;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use time::{Date, OffsetDateTime};

static TAX_CODE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([A-Z]{3})([A-Z]{3})(([0-9LMNPQRSTUV]{2})([ABCDEHLMPRST])([0-9LMNPQRSTUV]{2}))([A-Z][0-9LMNPQRSTUV]{3})([A-Z])$",
    )
    .expect("valid tax code regex")
});

/// Decodes tax codes against an injected place directory.
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'a> {
    places: &'a PlaceDirectory,
    reference_date: Option<Date>,
}

impl<'a> Decoder<'a> {
    /// Creates a decoder that disambiguates centuries against today (UTC).
    pub fn new(places: &'a PlaceDirectory) -> Self {
        Self {
            places,
            reference_date: None,
        }
    }

    /// Pins "today" used for century disambiguation.
    pub fn with_reference_date(mut self, date: Date) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// Decodes `tax_code` (case-insensitive).
    ///
    /// # Errors
    /// - `Malformed` when the input does not match the grammar.
    /// - `UnknownPlaceCode` when no municipality or country has the embedded
    ///   code.
    pub fn decode(&self, tax_code: &str) -> ParseResult<DecodedTaxCode> {
        let code = tax_code.to_ascii_uppercase();
        let raw = parse_raw(&code)?;

        let year = self.decode_year(&raw.birthdate_year);
        let month = raw
            .birthdate_month
            .chars()
            .next()
            .and_then(month_number)
            .ok_or_else(|| ParseError::Malformed(code.clone()))?;
        let (day, gender) = decode_day_and_gender(&raw.birthdate_day);
        let birthplace = self.decode_birthplace(&raw.birthplace)?;
        let omocodes = progressive_omocodes(&code);

        debug!("event=decode module=codec status=ok");
        Ok(DecodedTaxCode {
            code,
            gender,
            birthdate: BirthDate { year, month, day },
            birthplace,
            omocodes,
            raw,
        })
    }

    /// Returns whether `tax_code` decodes.
    pub fn is_valid(&self, tax_code: &str) -> bool {
        self.decode(tax_code).is_ok()
    }

    fn decode_year(&self, raw_year: &str) -> i32 {
        let current = self
            .reference_date
            .unwrap_or_else(|| OffsetDateTime::now_utc().date())
            .year();
        let year = current - current.rem_euclid(100) + i32::from(decoded_number(raw_year));
        if year > current {
            year - 100
        } else {
            year
        }
    }

    fn decode_birthplace(&self, raw_place: &str) -> ParseResult<PlaceRecord> {
        let mut chars = raw_place.chars();
        let code: String = chars
            .next()
            .into_iter()
            .chain(chars.map(decode_char))
            .collect();
        self.places
            .resolve_code(&code)
            .ok_or(ParseError::UnknownPlaceCode(code))
    }
}

fn parse_raw(code: &str) -> ParseResult<RawTaxCode> {
    let captures = TAX_CODE_RE
        .captures(code)
        .ok_or_else(|| ParseError::Malformed(code.to_string()))?;
    // Every group in the grammar is mandatory.
    let group = |index: usize| captures[index].to_string();

    Ok(RawTaxCode {
        surname: group(1),
        name: group(2),
        birthdate: group(3),
        birthdate_year: group(4),
        birthdate_month: group(5),
        birthdate_day: group(6),
        birthplace: group(7),
        cin: group(8),
    })
}

fn decode_day_and_gender(raw_day: &str) -> (u8, Gender) {
    let day = decoded_number(raw_day);
    if day > 40 {
        (day - 40, Gender::Female)
    } else {
        (day, Gender::Male)
    }
}

/// Numeric value of a two-character field that may hold homograph letters.
///
/// The grammar guarantees every character decodes to a digit.
fn decoded_number(raw: &str) -> u8 {
    raw.chars()
        .map(decode_char)
        .filter_map(|c| c.to_digit(10))
        .fold(0, |value, digit| value * 10 + digit as u8)
}

/// Canonical code, then seven variants re-encoding one more position each,
/// from the last omocodable position backwards.
fn progressive_omocodes(code: &str) -> Vec<String> {
    let mut chars: Vec<char> = code.chars().take(BODY_LEN).collect();
    for index in OMOCODABLE_INDEXES.iter().rev() {
        chars[*index] = decode_char(chars[*index]);
    }

    let mut codes = Vec::with_capacity(OMOCODABLE_INDEXES.len() + 1);
    codes.push(with_check_char(&chars));
    for index in OMOCODABLE_INDEXES.iter().rev() {
        chars[*index] = encode_char(chars[*index]);
        codes.push(with_check_char(&chars));
    }
    codes
}

fn with_check_char(chars: &[char]) -> String {
    let mut code: String = chars.iter().collect();
    let cin = check_char(&code);
    code.push(cin);
    code
}
