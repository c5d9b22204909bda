use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::{
    modules::booking::domain::entities::{Booking, NewBooking},
    shared::{
        domain::{ActivityId, BookingId, UserId},
        errors::AppResult,
    },
};

/// Access to bookings held by the activity service
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn list_for_activity(&self, activity_id: ActivityId) -> AppResult<Vec<Booking>>;

    async fn list_for_user(&self, user_id: UserId) -> AppResult<Vec<Booking>>;

    /// The service rejects duplicates and users without an active subscription
    async fn create(&self, booking: &NewBooking) -> AppResult<Booking>;

    async fn cancel(&self, booking_id: BookingId) -> AppResult<()>;
}
