//! SQLite storage implementation for the login-attempt audit.

mod model;
mod repository;

pub use model::LoginAttemptDB;
pub use repository::LoginAttemptRepository;
