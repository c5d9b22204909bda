use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::log_info;
use crate::modules::user::domain::{NewSubscription, NewUser, Subscription, User, UserRepository};
use crate::shared::domain::Session;
use crate::shared::errors::AppResult;

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn register(&self, user: NewUser) -> AppResult<User> {
        user.validate()?;
        let created = self.user_repo.create_user(&user).await?;
        log_info!("Registered user {}", created.id);
        Ok(created)
    }

    pub async fn profile(&self, session: &Session) -> AppResult<User> {
        self.user_repo.get_user(session.user_id()).await
    }

    /// Start a plan for the session user.
    ///
    /// Either end of the period may be left to the service.
    pub async fn subscribe(
        &self,
        session: &Session,
        plan_type: &str,
        start_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
    ) -> AppResult<Subscription> {
        let mut subscription = NewSubscription::new(session, plan_type);
        if let Some(start) = start_date {
            subscription = subscription.with_start_date(start);
        }
        if let Some(end) = end_date {
            subscription = subscription.with_end_date(end);
        }
        subscription.validate()?;

        let created = self.user_repo.create_subscription(&subscription).await?;
        log_info!(
            "User {} subscribed to '{}'",
            session.user_id(),
            created.plan_type
        );
        Ok(created)
    }

    /// `None` when the session user has no plan
    pub async fn current_subscription(&self, session: &Session) -> AppResult<Option<Subscription>> {
        self.user_repo.get_subscription(session.user_id()).await
    }
}
