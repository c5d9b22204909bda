use std::sync::Arc;

use crate::log_info;
use crate::modules::volunteer::domain::{
    NewVolunteerApplication, VolunteerApplication, VolunteerRepository,
};
use crate::shared::domain::ActivityId;
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

pub struct VolunteerService {
    volunteer_repo: Arc<dyn VolunteerRepository>,
}

impl VolunteerService {
    pub fn new(volunteer_repo: Arc<dyn VolunteerRepository>) -> Self {
        Self { volunteer_repo }
    }

    /// Submit an application; invalid input never reaches the service
    pub async fn apply(
        &self,
        application: NewVolunteerApplication,
    ) -> AppResult<VolunteerApplication> {
        application.validate()?;
        let created = self.volunteer_repo.create(&application).await?;
        log_info!(
            "Volunteer application {} received for activity {}",
            created.id,
            created.activity_id
        );
        Ok(created)
    }

    pub async fn list_for_activity(
        &self,
        activity_id: ActivityId,
    ) -> AppResult<Vec<VolunteerApplication>> {
        Validator::validate_id("Activity", activity_id)?;
        self.volunteer_repo.list_for_activity(activity_id).await
    }
}
