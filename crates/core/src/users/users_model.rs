//! User domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::achievements::Achievement;
use crate::auth::PIN_LENGTH;
use crate::goals::{Goal, NewGoal};
use crate::{errors::ValidationError, Error, Result};

/// Longest accepted display name.
pub const MAX_NAME_LENGTH: usize = 50;

/// Domain model representing a participant.
///
/// The password hash is never serialized; API-facing aggregates
/// (`UserSummary`, `UserStats`) expose `has_password` instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A user with goals attached, as returned by the name-selection listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub has_password: bool,
    pub goals: Vec<Goal>,
}

/// The full per-user snapshot every progress view is computed from:
/// a user with both goals and achievements attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub id: String,
    pub name: String,
    pub goals: Vec<Goal>,
    pub achievements: Vec<Achievement>,
}

/// Input model for registration. Upserts the user by name and upserts
/// each goal on its (user, exercise) key.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUser {
    pub name: String,
    #[serde(default)]
    pub pin: Option<String>,
    pub goals: Vec<NewGoal>,
}

impl RegisterUser {
    pub fn validate(&self) -> Result<()> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Name cannot be empty".to_string(),
            )));
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Name cannot be longer than {} characters",
                MAX_NAME_LENGTH
            ))));
        }
        if let Some(pin) = &self.pin {
            if pin.len() != PIN_LENGTH || !pin.chars().all(|c| c.is_ascii_digit()) {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "PIN must be exactly {} digits",
                    PIN_LENGTH
                ))));
            }
        }
        if self.goals.is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "At least one goal is required".to_string(),
            )));
        }
        for goal in &self.goals {
            goal.validate()?;
        }
        Ok(())
    }
}
