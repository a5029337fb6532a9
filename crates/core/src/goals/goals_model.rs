//! Goal domain models.

use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Domain model representing an annual exercise goal.
///
/// At most one goal exists per (user, exercise) pair; registration upserts
/// on that key. `target` is the annual total, `unit` the display unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub user_id: String,
    pub exercise: String,
    pub target: f64,
    pub unit: String,
}

/// Input model for creating or updating a goal.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub exercise: String,
    pub target: f64,
    pub unit: String,
}

impl NewGoal {
    pub fn validate(&self) -> Result<()> {
        if self.exercise.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Exercise cannot be empty".to_string(),
            )));
        }
        if !self.target.is_finite() || self.target <= 0.0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Goal target must be a positive number".to_string(),
            )));
        }
        Ok(())
    }
}
