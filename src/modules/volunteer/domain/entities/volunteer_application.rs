use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::domain::{ActivityId, VolunteerId};
use crate::shared::errors::AppResult;
use crate::shared::utils::{datetime, Validator};

/// How to reach a volunteer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolunteerContact {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl VolunteerContact {
    pub fn validate(&self) -> AppResult<()> {
        Validator::validate_contact_name(&self.name)?;
        Validator::validate_email(&self.email)?;
        if let Some(phone) = &self.phone {
            Validator::validate_phone(phone)?;
        }
        Ok(())
    }
}

/// An offer to help run an activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolunteerApplication {
    pub id: VolunteerId,
    pub activity_id: ActivityId,
    #[serde(flatten)]
    pub contact: VolunteerContact,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default, with = "datetime::flexible::option")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for `POST /volunteers`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewVolunteerApplication {
    pub activity_id: ActivityId,
    #[serde(flatten)]
    pub contact: VolunteerContact,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
}

impl NewVolunteerApplication {
    pub fn validate(&self) -> AppResult<()> {
        Validator::validate_id("Activity", self.activity_id)?;
        self.contact.validate()?;
        if let Some(availability) = &self.availability {
            Validator::validate_availability(availability)?;
        }
        Ok(())
    }
}
