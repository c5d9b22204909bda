use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    modules::volunteer::domain::{
        NewVolunteerApplication, VolunteerApplication, VolunteerRepository,
    },
    shared::{domain::ActivityId, errors::AppResult, infrastructure::ApiClient},
};

pub struct HttpVolunteerRepository {
    client: Arc<ApiClient>,
}

impl HttpVolunteerRepository {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl VolunteerRepository for HttpVolunteerRepository {
    async fn create(
        &self,
        application: &NewVolunteerApplication,
    ) -> AppResult<VolunteerApplication> {
        self.client.post_json("volunteers", application).await
    }

    async fn list_for_activity(
        &self,
        activity_id: ActivityId,
    ) -> AppResult<Vec<VolunteerApplication>> {
        self.client
            .get(&format!("activities/{}/volunteers", activity_id))
            .await
    }
}
