use super::application::service::{ActivityDetail, ActivityService, HomeView};
use super::domain::{Activity, ActivityFilter, NewActivity};
use crate::modules::aggregation::EnrichedActivity;
use crate::shared::domain::ActivityId;
use crate::shared::utils::LogContext;

use crate::log_debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrowseActivitiesRequest {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetActivityDetailRequest {
    pub id: ActivityId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateActivityRequest {
    #[serde(flatten)]
    pub activity: NewActivity,
}

pub async fn load_home(activity_service: &ActivityService) -> Result<HomeView, String> {
    activity_service.home().await.map_err(|e| e.to_string())
}

pub async fn browse_activities(
    request: BrowseActivitiesRequest,
    activity_service: &ActivityService,
) -> Result<Vec<EnrichedActivity>, String> {
    let filter = ActivityFilter::from_form(&request.category, &request.location);
    log_debug!("browse_activities called with {:?}", filter);
    activity_service
        .browse(&filter)
        .await
        .map_err(|e| e.to_string())
}

pub async fn list_categories(activity_service: &ActivityService) -> Result<Vec<String>, String> {
    activity_service
        .categories()
        .await
        .map_err(|e| e.to_string())
}

pub async fn get_activity_detail(
    request: GetActivityDetailRequest,
    activity_service: &ActivityService,
) -> Result<ActivityDetail, String> {
    activity_service
        .detail(request.id)
        .await
        .map_err(|e| e.to_string())
}

pub async fn create_activity(
    request: CreateActivityRequest,
    activity_service: &ActivityService,
) -> Result<Activity, String> {
    activity_service
        .create_activity(request.activity)
        .await
        .map_err(|e| {
            LogContext::error_with_context(&e, "create_activity failed");
            e.user_message("Could not create the activity. Please try again.")
        })
}
