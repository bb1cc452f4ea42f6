//! Tax code encoding and decoding.
//!
//! # Responsibility
//! - Map personal attributes to a canonical 16-character code.
//! - Recover attributes and omocode variants from a code.
//!
//! # Invariants
//! - Encoder and decoder depend on the shared tables, never on each other.
//! - Every operation is pure given its injected place directory.

pub mod checksum;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod months;
pub mod omocode;
pub mod omocodia;
