//! Value types shared by the encoder and decoder.
//!
//! # Responsibility
//! - Define the personal attributes consumed by encoding.
//! - Define place records and the decoded tax code shape.
//!
//! # Invariants
//! - Every type here is a plain value; nothing holds shared mutable state.
//! - Serialized field names are stable for JSON consumers.

pub mod person;
pub mod place;
pub mod tax_code;
