use std::sync::Arc;

use log::debug;

use super::users_model::{RegisterUser, User, UserStats, UserSummary};
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};
use crate::auth::PinHasher;
use crate::errors::Result;

/// Service for managing users and registration.
pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
    pin_hasher: Arc<dyn PinHasher>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepositoryTrait>, pin_hasher: Arc<dyn PinHasher>) -> Self {
        UserService {
            repository,
            pin_hasher,
        }
    }
}

#[async_trait::async_trait]
impl UserServiceTrait for UserService {
    /// Registers a participant: upserts the user by name and upserts each
    /// submitted goal on its (user, exercise) key. An optional PIN is hashed
    /// and stored only when the user has no credential yet; the canonical
    /// credential path is trust-on-first-use at login.
    async fn register(&self, input: RegisterUser) -> Result<User> {
        input.validate()?;
        let name = input.name.trim().to_string();
        debug!("Registering user {} with {} goals", name, input.goals.len());

        let password_hash = match &input.pin {
            Some(pin) => Some(self.pin_hasher.hash(pin)?),
            None => None,
        };

        self.repository
            .upsert_with_goals(&name, input.goals, password_hash)
            .await
    }

    fn get_all(&self) -> Result<Vec<UserSummary>> {
        self.repository.list_with_goals()
    }

    fn get_stats(&self) -> Result<Vec<UserStats>> {
        self.repository.load_stats()
    }

    /// Whether the named user has a stored credential. Unknown names are
    /// reported as `false` so the caller can branch to "set pin".
    fn has_password(&self, name: &str) -> Result<bool> {
        let user = self.repository.get_by_name(name.trim())?;
        Ok(user.map(|u| u.password_hash.is_some()).unwrap_or(false))
    }

    fn get_by_id(&self, user_id: &str) -> Result<User> {
        self.repository.get_by_id(user_id)
    }
}
