//! Achievement domain models.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Domain model representing one logged workout entry.
///
/// Time of day is irrelevant; `date` carries the calendar day the entry
/// counts towards. Several entries per user/exercise/date are allowed and
/// all summed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub user_id: String,
    pub exercise: String,
    pub value: f64,
    pub date: NaiveDate,
    pub created_at: NaiveDateTime,
}

/// Input model for logging a workout entry.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewAchievement {
    pub exercise: String,
    pub value: f64,
    pub date: NaiveDate,
}

impl NewAchievement {
    pub fn validate(&self) -> Result<()> {
        if self.exercise.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Exercise cannot be empty".to_string(),
            )));
        }
        if !self.value.is_finite() || self.value <= 0.0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Value must be a positive number".to_string(),
            )));
        }
        Ok(())
    }
}
