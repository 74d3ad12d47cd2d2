//! Value objects shared across services.

pub mod operation;

pub use operation::Operation;
