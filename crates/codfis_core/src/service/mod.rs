//! Use-case services.
//!
//! # Responsibility
//! - Compose codec components with injected reference tables.

pub mod tax_code_service;
