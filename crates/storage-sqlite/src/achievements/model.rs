//! Database models for achievements.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::users::UserDB;

/// Database model for achievements
#[derive(
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
#[diesel(table_name = crate::schema::achievements)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct AchievementDB {
    pub id: String,
    pub user_id: String,
    pub exercise: String,
    pub value: f64,
    pub date: NaiveDate,
    pub created_at: NaiveDateTime,
}

/// Database model for logging a new achievement
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::achievements)]
#[serde(rename_all = "camelCase")]
pub struct NewAchievementDB {
    pub id: String,
    pub user_id: String,
    pub exercise: String,
    pub value: f64,
    pub date: NaiveDate,
    pub created_at: NaiveDateTime,
}

// Conversion to domain models
impl From<AchievementDB> for pushfit_core::achievements::Achievement {
    fn from(db: AchievementDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            exercise: db.exercise,
            value: db.value,
            date: db.date,
            created_at: db.created_at,
        }
    }
}
