use std::sync::Arc;

use chrono::{Duration, Utc};
use log::{debug, warn};

use super::auth_constants::{ATTEMPT_WINDOW_MINUTES, MAX_LOGIN_ATTEMPTS};
use super::auth_errors::AuthError;
use super::auth_model::Credentials;
use super::auth_traits::{AuthServiceTrait, LoginAttemptRepositoryTrait, PinHasher};
use crate::errors::Result;
use crate::users::{User, UserRepositoryTrait};

/// Service implementing PIN login with a persistent rate-limit window.
pub struct AuthService {
    user_repository: Arc<dyn UserRepositoryTrait>,
    attempt_repository: Arc<dyn LoginAttemptRepositoryTrait>,
    pin_hasher: Arc<dyn PinHasher>,
}

impl AuthService {
    pub fn new(
        user_repository: Arc<dyn UserRepositoryTrait>,
        attempt_repository: Arc<dyn LoginAttemptRepositoryTrait>,
        pin_hasher: Arc<dyn PinHasher>,
    ) -> Self {
        AuthService {
            user_repository,
            attempt_repository,
            pin_hasher,
        }
    }
}

#[async_trait::async_trait]
impl AuthServiceTrait for AuthService {
    async fn login(&self, credentials: Credentials) -> Result<User> {
        credentials.validate()?;
        let name = credentials.name.trim();

        let user = self
            .user_repository
            .get_by_name(name)?
            .ok_or_else(|| AuthError::UserNotFound(name.to_string()))?;

        let window_start =
            Utc::now().naive_utc() - Duration::minutes(ATTEMPT_WINDOW_MINUTES);
        let recent_failures = self.attempt_repository.count_since(&user.id, window_start)?;
        if recent_failures >= MAX_LOGIN_ATTEMPTS {
            warn!("Login for user {} locked by rate limit", user.id);
            return Err(AuthError::TooManyAttempts.into());
        }

        match &user.password_hash {
            // Trust on first use: the first submitted PIN becomes the credential.
            None => {
                debug!("Storing first-use credential for user {}", user.id);
                let password_hash = self.pin_hasher.hash(&credentials.pin)?;
                self.user_repository
                    .set_password_hash(&user.id, &password_hash)
                    .await?;
                Ok(user)
            }
            Some(password_hash) => {
                if self.pin_hasher.verify(&credentials.pin, password_hash)? {
                    Ok(user)
                } else {
                    self.attempt_repository.record_failure(&user.id).await?;
                    Err(AuthError::InvalidPin.into())
                }
            }
        }
    }
}
