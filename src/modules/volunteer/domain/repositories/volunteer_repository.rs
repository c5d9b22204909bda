use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::{
    modules::volunteer::domain::entities::{NewVolunteerApplication, VolunteerApplication},
    shared::{domain::ActivityId, errors::AppResult},
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait VolunteerRepository: Send + Sync {
    async fn create(&self, application: &NewVolunteerApplication)
        -> AppResult<VolunteerApplication>;

    async fn list_for_activity(&self, activity_id: ActivityId)
        -> AppResult<Vec<VolunteerApplication>>;
}
