use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, NaiveDateTime, Utc};
use diesel::prelude::*;
use diesel::SqliteConnection;
use uuid::Uuid;

use pushfit_core::auth::{LoginAttempt, LoginAttemptRepositoryTrait, ATTEMPT_WINDOW_MINUTES};
use pushfit_core::Result;

use super::model::LoginAttemptDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::login_attempts;

pub struct LoginAttemptRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl LoginAttemptRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        LoginAttemptRepository { pool, writer }
    }
}

#[async_trait]
impl LoginAttemptRepositoryTrait for LoginAttemptRepository {
    fn count_since(&self, user_id: &str, since: NaiveDateTime) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        let count = login_attempts::table
            .filter(login_attempts::user_id.eq(user_id))
            .filter(login_attempts::created_at.ge(since))
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(count)
    }

    async fn record_failure(&self, user_id: &str) -> Result<LoginAttempt> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<LoginAttempt> {
                let now = Utc::now().naive_utc();
                let attempt_db = LoginAttemptDB {
                    id: Uuid::new_v4().to_string(),
                    user_id,
                    created_at: now,
                };
                let inserted = diesel::insert_into(login_attempts::table)
                    .values(&attempt_db)
                    .returning(LoginAttemptDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;

                // Rows older than the window can never count again; drop them
                // while the writer has the table anyway.
                let cutoff = now - Duration::minutes(ATTEMPT_WINDOW_MINUTES);
                diesel::delete(login_attempts::table.filter(login_attempts::created_at.lt(cutoff)))
                    .execute(conn)
                    .map_err(StorageError::from)?;

                Ok(LoginAttempt::from(inserted))
            })
            .await
    }
}
