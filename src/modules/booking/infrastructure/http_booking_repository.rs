use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    modules::booking::domain::{Booking, BookingRepository, NewBooking},
    shared::{
        domain::{ActivityId, BookingId, UserId},
        errors::AppResult,
        infrastructure::ApiClient,
    },
};

/// `BookingRepository` backed by the activity service REST API
pub struct HttpBookingRepository {
    client: Arc<ApiClient>,
}

impl HttpBookingRepository {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BookingRepository for HttpBookingRepository {
    async fn list_for_activity(&self, activity_id: ActivityId) -> AppResult<Vec<Booking>> {
        self.client
            .get(&format!("activities/{}/bookings", activity_id))
            .await
    }

    async fn list_for_user(&self, user_id: UserId) -> AppResult<Vec<Booking>> {
        self.client.get(&format!("users/{}/bookings", user_id)).await
    }

    async fn create(&self, booking: &NewBooking) -> AppResult<Booking> {
        self.client.post_json("bookings", booking).await
    }

    async fn cancel(&self, booking_id: BookingId) -> AppResult<()> {
        self.client.delete(&format!("bookings/{}", booking_id)).await
    }
}
