use async_trait::async_trait;

use crate::errors::Result;
use crate::goals::NewGoal;
use crate::users::users_model::{RegisterUser, User, UserStats, UserSummary};

/// Trait for user repository operations.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    fn get_by_id(&self, user_id: &str) -> Result<User>;
    fn get_by_name(&self, name: &str) -> Result<Option<User>>;
    /// All users with their goals, ordered by name ascending.
    fn list_with_goals(&self) -> Result<Vec<UserSummary>>;
    /// All users with goals and achievements attached - the snapshot the
    /// progress engine consumes.
    fn load_stats(&self) -> Result<Vec<UserStats>>;
    /// Upserts the user by name and each goal by (user, exercise),
    /// atomically. A password hash set on an existing user is kept.
    async fn upsert_with_goals(
        &self,
        name: &str,
        goals: Vec<NewGoal>,
        password_hash: Option<String>,
    ) -> Result<User>;
    async fn set_password_hash(&self, user_id: &str, password_hash: &str) -> Result<()>;
}

/// Trait for user service operations.
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn register(&self, input: RegisterUser) -> Result<User>;
    fn get_all(&self) -> Result<Vec<UserSummary>>;
    fn get_stats(&self) -> Result<Vec<UserStats>>;
    fn has_password(&self, name: &str) -> Result<bool>;
    fn get_by_id(&self, user_id: &str) -> Result<User>;
}
