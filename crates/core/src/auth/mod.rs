//! Auth module - PIN verification, trust-on-first-use, and login rate
//! limiting. Hashing itself lives behind the `PinHasher` trait so the
//! crypto choice stays at the application edge.

mod auth_constants;
mod auth_errors;
mod auth_model;
mod auth_service;
mod auth_traits;

#[cfg(test)]
mod auth_service_tests;

pub use auth_constants::{ATTEMPT_WINDOW_MINUTES, MAX_LOGIN_ATTEMPTS, PIN_LENGTH};
pub use auth_errors::AuthError;
pub use auth_model::{Credentials, LoginAttempt};
pub use auth_service::AuthService;
pub use auth_traits::{AuthServiceTrait, LoginAttemptRepositoryTrait, PinHasher};
