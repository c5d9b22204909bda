use super::application::service::VolunteerService;
use super::domain::{NewVolunteerApplication, VolunteerApplication, VolunteerContact};
use crate::shared::domain::ActivityId;
use crate::shared::utils::LogContext;

use serde::{Deserialize, Serialize};

/// The volunteer sign-up form as the user fills it in
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VolunteerForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub availability: String,
    #[serde(default)]
    pub experience: String,
}

impl VolunteerForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Trimmed payload; blank optional fields are left out
    pub fn to_application(&self, activity_id: ActivityId) -> NewVolunteerApplication {
        NewVolunteerApplication {
            activity_id,
            contact: VolunteerContact {
                name: self.name.trim().to_string(),
                email: self.email.trim().to_string(),
                phone: non_blank(&self.phone),
            },
            availability: non_blank(&self.availability),
            experience: non_blank(&self.experience),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListVolunteersRequest {
    pub activity_id: ActivityId,
}

/// Submit the form for `activity_id`. The form is reset only after the
/// service accepted the application.
pub async fn submit_volunteer_application(
    activity_id: ActivityId,
    form: &mut VolunteerForm,
    volunteer_service: &VolunteerService,
) -> Result<VolunteerApplication, String> {
    let created = volunteer_service
        .apply(form.to_application(activity_id))
        .await
        .map_err(|e| {
            LogContext::error_with_context(&e, "submit_volunteer_application failed");
            e.user_message("Volunteer application failed. Please try again.")
        })?;

    form.reset();
    Ok(created)
}

pub async fn list_volunteers(
    request: ListVolunteersRequest,
    volunteer_service: &VolunteerService,
) -> Result<Vec<VolunteerApplication>, String> {
    volunteer_service
        .list_for_activity(request.activity_id)
        .await
        .map_err(|e| e.to_string())
}
