use async_trait::async_trait;
use std::sync::Arc;

use super::dto::CategoriesResponse;
use crate::{
    modules::activity::domain::{Activity, ActivityFilter, ActivityRepository, NewActivity},
    shared::{domain::ActivityId, errors::AppResult, infrastructure::ApiClient},
};

/// `ActivityRepository` backed by the activity service REST API
pub struct HttpActivityRepository {
    client: Arc<ApiClient>,
}

impl HttpActivityRepository {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ActivityRepository for HttpActivityRepository {
    async fn list_activities(&self, filter: &ActivityFilter) -> AppResult<Vec<Activity>> {
        if filter.is_empty() {
            self.client.get("activities").await
        } else {
            self.client.get_with_query("activities", filter).await
        }
    }

    async fn get_activity(&self, id: ActivityId) -> AppResult<Activity> {
        self.client.get(&format!("activities/{}", id)).await
    }

    async fn create_activity(&self, activity: &NewActivity) -> AppResult<Activity> {
        self.client.post_json("activities", activity).await
    }

    async fn list_categories(&self) -> AppResult<Vec<String>> {
        let response: CategoriesResponse = self.client.get("categories").await?;
        Ok(response.categories)
    }
}
