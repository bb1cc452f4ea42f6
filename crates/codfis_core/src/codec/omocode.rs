//! Full omocode set of a tax code.
//!
//! # Responsibility
//! - Recover the canonical code from any of its omocodes.
//! - Generate every code a person could be assigned.
//!
//! # Invariants
//! - The set always has 128 distinct members, canonical first.

use crate::codec::checksum::check_char;
use crate::codec::omocodia::{
    all_substitution_combinations, decode_char, encode_char, OMOCODABLE_INDEXES,
};
use crate::model::tax_code::BODY_LEN;

/// Omocode view over a single tax code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Omocode {
    tax_code: String,
    original: String,
}

impl Omocode {
    /// Builds the view; `tax_code` is upper-cased.
    pub fn new(tax_code: &str) -> Self {
        let tax_code = tax_code.trim().to_ascii_uppercase();
        let original = substitute(&tax_code, &OMOCODABLE_INDEXES, decode_char);
        Self { tax_code, original }
    }

    pub fn tax_code(&self) -> &str {
        &self.tax_code
    }

    /// Code with every omocodable position decoded to a digit.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Returns whether the wrapped code is already the canonical one.
    pub fn is_canonical(&self) -> bool {
        self.tax_code == self.original
    }

    /// Canonical code followed by the 127 substituted variants.
    ///
    /// The empty combination comes first and leaves the canonical code as is.
    pub fn omocodes(&self) -> Vec<String> {
        all_substitution_combinations()
            .iter()
            .map(|combo| substitute(&self.original, combo, encode_char))
            .collect()
    }
}

fn substitute(code: &str, indexes: &[usize], translate: fn(char) -> char) -> String {
    let mut chars: Vec<char> = code.chars().take(BODY_LEN).collect();
    for index in indexes {
        if let Some(c) = chars.get_mut(*index) {
            *c = translate(*c);
        }
    }
    let mut body: String = chars.into_iter().collect();
    let cin = check_char(&body);
    body.push(cin);
    body
}
