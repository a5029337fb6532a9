use std::sync::Arc;

use log::debug;

use super::achievements_model::{Achievement, NewAchievement};
use super::achievements_traits::{AchievementRepositoryTrait, AchievementServiceTrait};
use crate::errors::Result;
use crate::Error;

/// Service for logging and removing workout entries.
pub struct AchievementService {
    repository: Arc<dyn AchievementRepositoryTrait>,
}

impl AchievementService {
    pub fn new(repository: Arc<dyn AchievementRepositoryTrait>) -> Self {
        AchievementService { repository }
    }
}

#[async_trait::async_trait]
impl AchievementServiceTrait for AchievementService {
    async fn log_achievement(
        &self,
        user_id: &str,
        new_achievement: NewAchievement,
    ) -> Result<Achievement> {
        new_achievement.validate()?;
        debug!(
            "Logging {} {} for user {}",
            new_achievement.value, new_achievement.exercise, user_id
        );
        self.repository.insert(user_id, new_achievement).await
    }

    async fn delete_achievement(&self, achievement_id: &str, acting_user_id: &str) -> Result<()> {
        let achievement = self.repository.get_by_id(achievement_id)?;
        if achievement.user_id != acting_user_id {
            return Err(Error::Forbidden(
                "Achievements can only be deleted by their owner".to_string(),
            ));
        }
        self.repository.delete(achievement_id).await?;
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<Achievement>> {
        self.repository.list_all()
    }

    fn list_for_user(&self, user_id: &str) -> Result<Vec<Achievement>> {
        self.repository.list_for_user(user_id)
    }
}
