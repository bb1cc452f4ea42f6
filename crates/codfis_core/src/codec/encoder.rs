//! Personal attributes to tax code.
//!
//! # Responsibility
//! - Derive surname, name, date and place components.
//! - Append the check character over the 15-character body.
//!
//! # Invariants
//! - Output is always 16 upper-case `[A-Z0-9]` characters.
//! - Encoding is deterministic for a given input and directory.

use crate::codec::checksum::check_char;
use crate::codec::error::{EncodeError, EncodeResult};
use crate::codec::months::month_letter;
use crate::model::person::{Gender, PersonalData};
use crate::normalize::{consonants, slug, vowels};
use crate::places::directory::PlaceDirectory;
use log::debug;
use time::Date;

/// Encodes personal data against an injected place directory.
#[derive(Debug, Clone, Copy)]
pub struct Encoder<'a> {
    places: &'a PlaceDirectory,
}

impl<'a> Encoder<'a> {
    pub fn new(places: &'a PlaceDirectory) -> Self {
        Self { places }
    }

    /// Computes the canonical tax code.
    ///
    /// # Errors
    /// - `MissingField` when any attribute is blank.
    /// - `InvalidBirthdate` when the birthdate text does not parse.
    /// - `PlaceNotFound` when no municipality or country matches.
    pub fn encode(&self, data: &PersonalData) -> EncodeResult<String> {
        data.validate_presence()?;
        let birthdate = data.birthdate.resolve()?;

        let mut code = String::with_capacity(16);
        code.push_str(&encode_surname(&data.surname));
        code.push_str(&encode_name(&data.name));
        code.push_str(&encode_birthdate(birthdate, data.gender));
        code.push_str(self.encode_birthplace(&data.birthplace)?);
        code.push(check_char(&code));

        debug!("event=encode module=codec status=ok");
        Ok(code)
    }

    fn encode_birthplace(&self, birthplace: &str) -> EncodeResult<&'a str> {
        self.places
            .find_code(birthplace)
            .ok_or_else(|| EncodeError::PlaceNotFound(birthplace.trim().to_string()))
    }
}

/// First three consonants, padded with vowels, then `X`.
pub fn encode_surname(surname: &str) -> String {
    let slugged = slug(surname);
    pad_component(consonants(&slugged), vowels(&slugged))
}

/// Like [`encode_surname`], except that with more than three consonants the
/// second one is skipped.
pub fn encode_name(name: &str) -> String {
    let slugged = slug(name);
    let mut name_consonants = consonants(&slugged);
    if name_consonants.len() > 3 {
        name_consonants.remove(1);
    }
    pad_component(name_consonants, vowels(&slugged))
}

/// Two-digit year, month letter and day (plus 40 for females).
pub fn encode_birthdate(birthdate: Date, gender: Gender) -> String {
    let year = birthdate.year().rem_euclid(100);
    let month = month_letter(birthdate.month());
    let day = birthdate.day() + gender.day_offset();
    format!("{year:02}{month}{day:02}")
}

fn pad_component(consonants: Vec<char>, vowels: Vec<char>) -> String {
    consonants
        .into_iter()
        .chain(vowels)
        .chain(std::iter::repeat('x'))
        .take(3)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
