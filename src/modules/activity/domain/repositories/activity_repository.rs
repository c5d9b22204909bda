use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::{
    modules::activity::domain::{
        entities::{Activity, NewActivity},
        value_objects::ActivityFilter,
    },
    shared::{domain::ActivityId, errors::AppResult},
};

/// Access to activities held by the activity service
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// List activities, optionally narrowed by category and location
    async fn list_activities(&self, filter: &ActivityFilter) -> AppResult<Vec<Activity>>;

    /// Fetch one activity; a missing activity is `AppError::NotFound`
    async fn get_activity(&self, id: ActivityId) -> AppResult<Activity>;

    async fn create_activity(&self, activity: &NewActivity) -> AppResult<Activity>;

    /// The fixed set of categories the service accepts
    async fn list_categories(&self) -> AppResult<Vec<String>>;
}
