//! Common utilities shared between crates.

pub mod validation;
