use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::{
    modules::user::domain::entities::{NewSubscription, NewUser, Subscription, User},
    shared::{domain::UserId, errors::AppResult},
};

/// Access to user accounts and their membership plans
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// The service rejects an email that is already registered
    async fn create_user(&self, user: &NewUser) -> AppResult<User>;

    async fn get_user(&self, id: UserId) -> AppResult<User>;

    async fn create_subscription(&self, subscription: &NewSubscription) -> AppResult<Subscription>;

    /// `None` when the user has never subscribed
    async fn get_subscription(&self, user_id: UserId) -> AppResult<Option<Subscription>>;
}
