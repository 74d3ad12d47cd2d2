//! # Onboardly Core
//!
//! Core business logic and domain layer for the Onboardly backend.
//! This crate contains domain entities, business services, repository
//! interfaces, and error types that form the foundation of the application.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
