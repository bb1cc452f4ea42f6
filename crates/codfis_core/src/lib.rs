//! Italian fiscal code (codice fiscale) encoding and decoding.
//!
//! Encoding derives a 16-character code from surname, name, gender,
//! birthdate and birthplace. Decoding recovers gender, birthdate and
//! birthplace, plus the omocode variants of the code. Surname and name
//! letters are lossy and are not recovered.

pub mod codec;
pub mod logging;
pub mod model;
pub mod normalize;
pub mod places;
pub mod service;

pub use codec::checksum::{check_char, verify as verify_check_char};
pub use codec::decoder::Decoder;
pub use codec::encoder::Encoder;
pub use codec::error::{CodecError, EncodeError, EncodeResult, ParseError, ParseResult};
pub use codec::omocode::Omocode;
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig};
pub use model::person::{BirthdateInput, Gender, PersonalData};
pub use model::place::PlaceRecord;
pub use model::tax_code::{BirthDate, DecodedTaxCode, RawTaxCode};
pub use places::directory::{PlaceDataError, PlaceDirectory, PlaceSource};
pub use places::registry::{install_directory, installed_directory};
pub use service::tax_code_service::TaxCodeService;

/// Encodes personal data against the installed place tables.
///
/// Fails with `CodecError::PlaceData(NotInstalled)` before
/// [`install_directory`].
pub fn encode(data: &PersonalData) -> Result<String, CodecError> {
    let places = installed_directory()?;
    Ok(TaxCodeService::new(places).encode(data)?)
}

/// Decodes a tax code against the installed place tables.
pub fn decode(tax_code: &str) -> Result<DecodedTaxCode, CodecError> {
    let places = installed_directory()?;
    Ok(TaxCodeService::new(places).decode(tax_code)?)
}

/// Returns whether `tax_code` decodes against the installed place tables.
pub fn is_valid(tax_code: &str) -> bool {
    decode(tax_code).is_ok()
}

/// Returns the crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
