//! Place reference records.
//!
//! # Invariants
//! - `code` is one letter followed by three digits, upper-case.
//! - Records are immutable once loaded into a directory.

use serde::{Deserialize, Serialize};

/// Marker appended to the name of merged/abolished municipalities.
pub const SOPPRESSO_MARKER: &str = " (soppresso)";

/// One municipality or country with its cadastral code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub name: String,
    pub code: String,
}

impl PlaceRecord {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }

    /// Returns whether the record is flagged as merged/abolished.
    pub fn is_soppresso(&self) -> bool {
        self.name.contains("soppresso")
    }

    /// Returns a copy with the soppresso marker removed from the name.
    pub fn without_soppresso_marker(&self) -> Self {
        Self {
            name: self.name.replace(SOPPRESSO_MARKER, ""),
            code: self.code.clone(),
        }
    }
}

/// Returns whether `value` has the shape of a place code (`F205`).
pub fn is_place_code(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 4
        && bytes[0].is_ascii_alphabetic()
        && bytes[1..].iter().all(|b| b.is_ascii_digit())
}
