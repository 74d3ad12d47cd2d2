//! Shared wire-level types.

pub mod response;

pub use response::ApiResponse;
