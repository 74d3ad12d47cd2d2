//! Shared types and configuration used across the Onboardly backend crates.

pub mod config;
pub mod types;
pub mod utils;
