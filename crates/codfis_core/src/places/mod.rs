//! Read-only place reference tables.
//!
//! # Responsibility
//! - Hold municipality and country records in lookup order.
//! - Hold the process-wide tables installed by the embedding application.
//!
//! # Invariants
//! - Municipalities are always searched before countries.
//! - Tables are never mutated after construction.

pub mod directory;
pub mod registry;
