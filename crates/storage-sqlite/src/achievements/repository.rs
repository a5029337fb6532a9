use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use uuid::Uuid;

use pushfit_core::achievements::{Achievement, AchievementRepositoryTrait, NewAchievement};
use pushfit_core::Result;

use super::model::{AchievementDB, NewAchievementDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::achievements;

pub struct AchievementRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl AchievementRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        AchievementRepository { pool, writer }
    }
}

#[async_trait]
impl AchievementRepositoryTrait for AchievementRepository {
    fn get_by_id(&self, achievement_id: &str) -> Result<Achievement> {
        let mut conn = get_connection(&self.pool)?;
        let achievement_db = achievements::table
            .find(achievement_id)
            .first::<AchievementDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Achievement::from(achievement_db))
    }

    fn list_all(&self) -> Result<Vec<Achievement>> {
        let mut conn = get_connection(&self.pool)?;
        let achievements_db = achievements::table
            .order(achievements::date.desc())
            .load::<AchievementDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(achievements_db
            .into_iter()
            .map(Achievement::from)
            .collect())
    }

    fn list_for_user(&self, user_id: &str) -> Result<Vec<Achievement>> {
        let mut conn = get_connection(&self.pool)?;
        let achievements_db = achievements::table
            .filter(achievements::user_id.eq(user_id))
            .order(achievements::date.desc())
            .load::<AchievementDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(achievements_db
            .into_iter()
            .map(Achievement::from)
            .collect())
    }

    async fn insert(&self, user_id: &str, new_achievement: NewAchievement) -> Result<Achievement> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Achievement> {
                let achievement_db = NewAchievementDB {
                    id: Uuid::new_v4().to_string(),
                    user_id,
                    exercise: new_achievement.exercise,
                    value: new_achievement.value,
                    date: new_achievement.date,
                    created_at: Utc::now().naive_utc(),
                };
                let inserted = diesel::insert_into(achievements::table)
                    .values(&achievement_db)
                    .returning(AchievementDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Achievement::from(inserted))
            })
            .await
    }

    async fn delete(&self, achievement_id: &str) -> Result<usize> {
        let achievement_id = achievement_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(
                    diesel::delete(achievements::table.find(achievement_id))
                        .execute(conn)
                        .map_err(StorageError::from)?,
                )
            })
            .await
    }
}
