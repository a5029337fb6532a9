//! Pushfit Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for the pushfit challenge
//! tracker. It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod achievements;
pub mod auth;
pub mod catalog;
pub mod constants;
pub mod errors;
pub mod goals;
pub mod progress;
pub mod users;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
