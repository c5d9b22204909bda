use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    modules::user::domain::{NewSubscription, NewUser, Subscription, User, UserRepository},
    shared::{domain::UserId, errors::AppResult, infrastructure::ApiClient},
};

pub struct HttpUserRepository {
    client: Arc<ApiClient>,
}

impl HttpUserRepository {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserRepository for HttpUserRepository {
    async fn create_user(&self, user: &NewUser) -> AppResult<User> {
        self.client.post_json("users", user).await
    }

    async fn get_user(&self, id: UserId) -> AppResult<User> {
        self.client.get(&format!("users/{}", id)).await
    }

    async fn create_subscription(&self, subscription: &NewSubscription) -> AppResult<Subscription> {
        self.client.post_json("subscriptions", subscription).await
    }

    async fn get_subscription(&self, user_id: UserId) -> AppResult<Option<Subscription>> {
        // The service answers `null` rather than 404 for "no subscription"
        self.client
            .get(&format!("users/{}/subscription", user_id))
            .await
    }
}
