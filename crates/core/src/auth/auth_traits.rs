use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::auth::auth_model::{Credentials, LoginAttempt};
use crate::errors::Result;
use crate::users::User;

/// Trait for the failed-login audit repository.
#[async_trait]
pub trait LoginAttemptRepositoryTrait: Send + Sync {
    fn count_since(&self, user_id: &str, since: NaiveDateTime) -> Result<i64>;
    /// Records a failed attempt. Implementations may drop attempts that
    /// have aged out of every window while they are at it.
    async fn record_failure(&self, user_id: &str) -> Result<LoginAttempt>;
}

/// Hashes and verifies PINs. Implemented at the application edge so the
/// domain stays free of any particular password-hashing crate.
pub trait PinHasher: Send + Sync {
    fn hash(&self, pin: &str) -> Result<String>;
    /// `Ok(false)` is a mismatch; `Err` is a hashing-layer failure.
    fn verify(&self, pin: &str, password_hash: &str) -> Result<bool>;
}

/// Trait for auth service operations.
#[async_trait]
pub trait AuthServiceTrait: Send + Sync {
    /// Verifies the PIN for the named user and returns the user on success.
    /// A user without a stored credential adopts the submitted PIN
    /// (trust on first use).
    async fn login(&self, credentials: Credentials) -> Result<User>;
}
