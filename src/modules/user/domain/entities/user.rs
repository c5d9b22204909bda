use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::domain::UserId;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::{datetime, Validator};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, with = "datetime::flexible::option")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for `POST /users`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl NewUser {
    pub fn new(name: String, email: String) -> Self {
        Self {
            name,
            email,
            phone: None,
            age: None,
            address: None,
        }
    }

    pub fn with_phone(mut self, phone: String) -> Self {
        self.phone = Some(phone);
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_address(mut self, address: String) -> Self {
        self.address = Some(address);
        self
    }

    pub fn validate(&self) -> AppResult<()> {
        Validator::validate_contact_name(&self.name)?;
        Validator::validate_email(&self.email)?;
        if let Some(phone) = &self.phone {
            Validator::validate_phone(phone)?;
        }
        if let Some(age) = self.age {
            if !(1..=130).contains(&age) {
                return Err(AppError::ValidationError(format!(
                    "Age {} is out of range",
                    age
                )));
            }
        }
        Ok(())
    }
}
