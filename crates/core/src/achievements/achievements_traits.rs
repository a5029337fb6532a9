use async_trait::async_trait;

use crate::achievements::achievements_model::{Achievement, NewAchievement};
use crate::errors::Result;

/// Trait for achievement repository operations.
#[async_trait]
pub trait AchievementRepositoryTrait: Send + Sync {
    fn get_by_id(&self, achievement_id: &str) -> Result<Achievement>;
    /// Every entry across all users, date descending (newest first).
    fn list_all(&self) -> Result<Vec<Achievement>>;
    /// A user's entries, date descending (newest first).
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Achievement>>;
    async fn insert(&self, user_id: &str, new_achievement: NewAchievement) -> Result<Achievement>;
    async fn delete(&self, achievement_id: &str) -> Result<usize>;
}

/// Trait for achievement service operations.
#[async_trait]
pub trait AchievementServiceTrait: Send + Sync {
    async fn log_achievement(
        &self,
        user_id: &str,
        new_achievement: NewAchievement,
    ) -> Result<Achievement>;
    /// Deletes an entry after checking it belongs to `acting_user_id`.
    async fn delete_achievement(&self, achievement_id: &str, acting_user_id: &str) -> Result<()>;
    /// The shared activity log: every user's entries, newest first.
    fn list_all(&self) -> Result<Vec<Achievement>>;
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Achievement>>;
}
