use super::application::service::UserService;
use super::domain::{NewUser, Subscription, User};
use crate::shared::domain::Session;
use crate::shared::utils::LogContext;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    #[serde(flatten)]
    pub user: NewUser,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscribeRequest {
    pub plan_type: String,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
}

pub async fn register_user(
    request: RegisterUserRequest,
    user_service: &UserService,
) -> Result<User, String> {
    user_service.register(request.user).await.map_err(|e| {
        LogContext::error_with_context(&e, "register_user failed");
        e.user_message("Registration failed. Please try again.")
    })
}

pub async fn get_profile(session: &Session, user_service: &UserService) -> Result<User, String> {
    user_service
        .profile(session)
        .await
        .map_err(|e| e.to_string())
}

pub async fn subscribe(
    session: &Session,
    request: SubscribeRequest,
    user_service: &UserService,
) -> Result<Subscription, String> {
    user_service
        .subscribe(
            session,
            &request.plan_type,
            request.start_date,
            request.end_date,
        )
        .await
        .map_err(|e| {
            LogContext::error_with_context(&e, "subscribe failed");
            e.user_message("Subscription failed. Please try again.")
        })
}

pub async fn get_current_subscription(
    session: &Session,
    user_service: &UserService,
) -> Result<Option<Subscription>, String> {
    user_service
        .current_subscription(session)
        .await
        .map_err(|e| e.to_string())
}
