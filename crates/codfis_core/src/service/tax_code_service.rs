//! Tax code use-case service.
//!
//! # Responsibility
//! - Bundle one place directory with its encoder and decoder.
//! - Offer encode/decode/validate/omocode entry points to callers.
//!
//! # Invariants
//! - The service never mutates its directory.
//! - `is_valid` is true exactly when `decode` succeeds.

use crate::codec::decoder::Decoder;
use crate::codec::encoder::Encoder;
use crate::codec::error::{EncodeResult, ParseResult};
use crate::codec::omocode::Omocode;
use crate::model::person::PersonalData;
use crate::model::tax_code::DecodedTaxCode;
use crate::places::directory::PlaceDirectory;
use time::Date;

/// Facade over encoding and decoding for one set of reference tables.
#[derive(Debug, Clone)]
pub struct TaxCodeService<'a> {
    places: &'a PlaceDirectory,
    reference_date: Option<Date>,
}

impl<'a> TaxCodeService<'a> {
    /// Creates a service using the provided reference tables.
    pub fn new(places: &'a PlaceDirectory) -> Self {
        Self {
            places,
            reference_date: None,
        }
    }

    /// Pins the date used to pick the century of decoded birth years.
    pub fn with_reference_date(mut self, date: Date) -> Self {
        self.reference_date = Some(date);
        self
    }

    pub fn places(&self) -> &'a PlaceDirectory {
        self.places
    }

    /// Encodes personal data into its canonical tax code.
    pub fn encode(&self, data: &PersonalData) -> EncodeResult<String> {
        Encoder::new(self.places).encode(data)
    }

    /// Decodes a tax code into its components.
    pub fn decode(&self, tax_code: &str) -> ParseResult<DecodedTaxCode> {
        self.decoder().decode(tax_code)
    }

    /// Checks tax code validity.
    pub fn is_valid(&self, tax_code: &str) -> bool {
        self.decoder().is_valid(tax_code)
    }

    /// Canonical code plus all 127 omocodes of `tax_code`.
    ///
    /// The input must decode; its omocode set is derived from the canonical
    /// form, so any member of a set yields the same list.
    pub fn omocodes(&self, tax_code: &str) -> ParseResult<Vec<String>> {
        let decoded = self.decode(tax_code)?;
        Ok(Omocode::new(&decoded.code).omocodes())
    }

    fn decoder(&self) -> Decoder<'a> {
        let decoder = Decoder::new(self.places);
        match self.reference_date {
            Some(date) => decoder.with_reference_date(date),
            None => decoder,
        }
    }
}
