//! Auth domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::auth::auth_constants::PIN_LENGTH;
use crate::{errors::ValidationError, Error, Result};

/// Login input: a display name plus the 4-digit PIN.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub name: String,
    pub pin: String,
}

impl Credentials {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Name cannot be empty".to_string(),
            )));
        }
        if self.pin.len() != PIN_LENGTH || !self.pin.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "PIN must be exactly {} digits",
                PIN_LENGTH
            ))));
        }
        Ok(())
    }
}

/// One failed login, persisted so the attempt window survives restarts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginAttempt {
    pub id: String,
    pub user_id: String,
    pub created_at: NaiveDateTime,
}
