use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use uuid::Uuid;

use pushfit_core::goals::{Goal, NewGoal};
use pushfit_core::users::{User, UserRepositoryTrait, UserStats, UserSummary};
use pushfit_core::Result;

use super::model::{NewUserDB, UserDB};
use crate::achievements::AchievementDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::goals::{GoalDB, NewGoalDB};
use crate::schema::{achievements, goals, users};

pub struct UserRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        UserRepository { pool, writer }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    fn get_by_id(&self, user_id: &str) -> Result<User> {
        let mut conn = get_connection(&self.pool)?;
        let user_db = users::table
            .find(user_id)
            .first::<UserDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(User::from(user_db))
    }

    fn get_by_name(&self, user_name: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;
        let user_db = users::table
            .filter(users::name.eq(user_name))
            .first::<UserDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(user_db.map(User::from))
    }

    fn list_with_goals(&self) -> Result<Vec<UserSummary>> {
        let mut conn = get_connection(&self.pool)?;
        let users_db = users::table
            .order(users::name.asc())
            .load::<UserDB>(&mut conn)
            .map_err(StorageError::from)?;
        let goals_db = GoalDB::belonging_to(&users_db)
            .load::<GoalDB>(&mut conn)
            .map_err(StorageError::from)?
            .grouped_by(&users_db);

        Ok(users_db
            .into_iter()
            .zip(goals_db)
            .map(|(user_db, user_goals)| UserSummary {
                id: user_db.id,
                name: user_db.name,
                has_password: user_db.password_hash.is_some(),
                goals: user_goals.into_iter().map(Goal::from).collect(),
            })
            .collect())
    }

    fn load_stats(&self) -> Result<Vec<UserStats>> {
        let mut conn = get_connection(&self.pool)?;
        let users_db = users::table
            .order(users::created_at.asc())
            .load::<UserDB>(&mut conn)
            .map_err(StorageError::from)?;
        let goals_db = GoalDB::belonging_to(&users_db)
            .load::<GoalDB>(&mut conn)
            .map_err(StorageError::from)?
            .grouped_by(&users_db);
        let achievements_db = AchievementDB::belonging_to(&users_db)
            .order(achievements::date.asc())
            .load::<AchievementDB>(&mut conn)
            .map_err(StorageError::from)?
            .grouped_by(&users_db);

        Ok(users_db
            .into_iter()
            .zip(goals_db)
            .zip(achievements_db)
            .map(|((user_db, user_goals), user_achievements)| UserStats {
                id: user_db.id,
                name: user_db.name,
                goals: user_goals.into_iter().map(Goal::from).collect(),
                achievements: user_achievements
                    .into_iter()
                    .map(pushfit_core::achievements::Achievement::from)
                    .collect(),
            })
            .collect())
    }

    async fn upsert_with_goals(
        &self,
        user_name: &str,
        new_goals: Vec<NewGoal>,
        password_hash: Option<String>,
    ) -> Result<User> {
        let user_name = user_name.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<User> {
                let now = Utc::now().naive_utc();

                let existing = users::table
                    .filter(users::name.eq(&user_name))
                    .first::<UserDB>(conn)
                    .optional()
                    .map_err(StorageError::from)?;

                let user_db = match existing {
                    Some(user_db) => {
                        // A stored credential is never replaced here; only a
                        // user without one may adopt the submitted hash.
                        if user_db.password_hash.is_none() && password_hash.is_some() {
                            diesel::update(users::table.find(&user_db.id))
                                .set((
                                    users::password_hash.eq(&password_hash),
                                    users::updated_at.eq(now),
                                ))
                                .execute(conn)
                                .map_err(StorageError::from)?;
                        }
                        users::table
                            .find(&user_db.id)
                            .first::<UserDB>(conn)
                            .map_err(StorageError::from)?
                    }
                    None => {
                        let new_user = NewUserDB {
                            id: Uuid::new_v4().to_string(),
                            name: user_name.clone(),
                            password_hash: password_hash.clone(),
                            created_at: now,
                            updated_at: now,
                        };
                        diesel::insert_into(users::table)
                            .values(&new_user)
                            .returning(UserDB::as_returning())
                            .get_result(conn)
                            .map_err(StorageError::from)?
                    }
                };

                for new_goal in new_goals {
                    let goal_db = NewGoalDB {
                        id: Uuid::new_v4().to_string(),
                        user_id: user_db.id.clone(),
                        exercise: new_goal.exercise,
                        target: new_goal.target,
                        unit: new_goal.unit,
                    };
                    diesel::insert_into(goals::table)
                        .values(&goal_db)
                        .on_conflict((goals::user_id, goals::exercise))
                        .do_update()
                        .set((
                            goals::target.eq(goal_db.target),
                            goals::unit.eq(goal_db.unit.clone()),
                        ))
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }

                Ok(User::from(user_db))
            })
            .await
    }

    async fn set_password_hash(&self, user_id: &str, password_hash: &str) -> Result<()> {
        let user_id = user_id.to_string();
        let password_hash = password_hash.to_string();
        // The NotFound check happens outside the writer job: the actor
        // flattens job errors into opaque internal ones.
        let affected = {
            let user_id = user_id.clone();
            self.writer
                .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                    let now = Utc::now().naive_utc();
                    Ok(diesel::update(users::table.find(&user_id))
                        .set((
                            users::password_hash.eq(&password_hash),
                            users::updated_at.eq(now),
                        ))
                        .execute(conn)
                        .map_err(StorageError::from)?)
                })
                .await?
        };
        if affected == 0 {
            return Err(pushfit_core::errors::DatabaseError::NotFound(format!(
                "User not found: {user_id}"
            ))
            .into());
        }
        Ok(())
    }
}
