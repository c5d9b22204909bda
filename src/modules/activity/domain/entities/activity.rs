use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::domain::ActivityId;
use crate::shared::errors::AppResult;
use crate::shared::utils::{datetime, Validator};

/// An experience offered on the platform (pottery class, swimming, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    pub location: String,
    #[serde(default)]
    pub instructor: Option<String>,
    #[serde(default, with = "datetime::flexible::option")]
    pub activity_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub max_participants: Option<u32>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, with = "datetime::flexible::option")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Activity {
    /// Seats left given a number of bookings, when the activity has a cap
    pub fn remaining_capacity(&self, booking_count: usize) -> Option<u32> {
        self.max_participants
            .map(|max| max.saturating_sub(u32::try_from(booking_count).unwrap_or(u32::MAX)))
    }
}

/// Payload for publishing a new activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewActivity {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        default,
        with = "datetime::flexible::option"
    )]
    pub activity_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl NewActivity {
    pub fn new(title: String, category: String, location: String) -> Self {
        Self {
            title,
            description: None,
            category,
            location,
            instructor: None,
            activity_date: None,
            max_participants: None,
            duration_minutes: None,
            price: None,
            image_url: None,
        }
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_instructor(mut self, instructor: String) -> Self {
        self.instructor = Some(instructor);
        self
    }

    pub fn with_schedule(mut self, activity_date: DateTime<Utc>, duration_minutes: u32) -> Self {
        self.activity_date = Some(activity_date);
        self.duration_minutes = Some(duration_minutes);
        self
    }

    pub fn with_capacity(mut self, max_participants: u32) -> Self {
        self.max_participants = Some(max_participants);
        self
    }

    pub fn validate(&self) -> AppResult<()> {
        Validator::validate_activity_title(&self.title)?;
        Validator::validate_category(&self.category)?;
        Validator::validate_location(&self.location)?;
        if self.max_participants == Some(0) {
            return Err(crate::shared::errors::AppError::ValidationError(
                "Capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
