use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::domain::{Session, SubscriptionId, UserId};
use crate::shared::errors::AppResult;
use crate::shared::utils::{datetime, Validator};

/// A membership plan; bookings require an active one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: SubscriptionId,
    pub user_id: UserId,
    pub plan_type: String,
    #[serde(default, with = "datetime::flexible::option")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, with = "datetime::flexible::option")]
    pub end_date: Option<DateTime<Utc>>,
    pub is_active: bool,
    #[serde(default, with = "datetime::flexible::option")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for `POST /subscriptions`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewSubscription {
    pub user_id: UserId,
    pub plan_type: String,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "datetime::flexible::option"
    )]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "datetime::flexible::option"
    )]
    pub end_date: Option<DateTime<Utc>>,
}

impl NewSubscription {
    pub fn new(session: &Session, plan_type: impl Into<String>) -> Self {
        Self {
            user_id: session.user_id(),
            plan_type: plan_type.into().trim().to_string(),
            start_date: None,
            end_date: None,
        }
    }

    pub fn with_start_date(mut self, start: DateTime<Utc>) -> Self {
        self.start_date = Some(start);
        self
    }

    pub fn with_end_date(mut self, end: DateTime<Utc>) -> Self {
        self.end_date = Some(end);
        self
    }

    pub fn validate(&self) -> AppResult<()> {
        Validator::validate_plan_type(&self.plan_type)?;
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end <= start {
                return Err(crate::shared::errors::AppError::ValidationError(
                    "Subscription must end after it starts".to_string(),
                ));
            }
        }
        Ok(())
    }
}
