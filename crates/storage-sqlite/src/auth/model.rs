//! Database models for the failed-login audit table.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::users::UserDB;

/// Database model for login attempts
#[derive(
    Insertable,
    Queryable,
    Identifiable,
    Associations,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(UserDB, foreign_key = user_id))]
#[diesel(table_name = crate::schema::login_attempts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct LoginAttemptDB {
    pub id: String,
    pub user_id: String,
    pub created_at: NaiveDateTime,
}

// Conversion to domain models
impl From<LoginAttemptDB> for pushfit_core::auth::LoginAttempt {
    fn from(db: LoginAttemptDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            created_at: db.created_at,
        }
    }
}
