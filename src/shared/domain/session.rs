use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};

use super::value_objects::UserId;

/// The acting user for user-scoped operations.
///
/// Passed explicitly into every call that needs it; nothing in the crate keeps
/// a current user in global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Session {
    user_id: UserId,
}

impl Session {
    pub fn new(user_id: UserId) -> AppResult<Self> {
        if user_id <= 0 {
            return Err(AppError::InvalidInput(format!(
                "Session user id must be positive, got {}",
                user_id
            )));
        }
        Ok(Self { user_id })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }
}
