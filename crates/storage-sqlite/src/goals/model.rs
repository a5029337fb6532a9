//! Database models for goals.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::users::UserDB;

/// Database model for goals
#[derive(
    Queryable,
    Identifiable,
    Associations,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(UserDB, foreign_key = user_id))]
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct GoalDB {
    pub id: String,
    pub user_id: String,
    pub exercise: String,
    pub target: f64,
    pub unit: String,
}

/// Database model for creating a new goal
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
#[serde(rename_all = "camelCase")]
pub struct NewGoalDB {
    pub id: String,
    pub user_id: String,
    pub exercise: String,
    pub target: f64,
    pub unit: String,
}

// Conversion to domain models
impl From<GoalDB> for pushfit_core::goals::Goal {
    fn from(db: GoalDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            exercise: db.exercise,
            target: db.target,
            unit: db.unit,
        }
    }
}
