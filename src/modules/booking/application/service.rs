use std::sync::Arc;

use crate::modules::aggregation::{Aggregator, EnrichedBooking};
use crate::modules::booking::domain::{Booking, BookingRepository, NewBooking};
use crate::shared::domain::{ActivityId, BookingId, Session};
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;
use crate::{log_debug, log_info};

pub struct BookingService {
    booking_repo: Arc<dyn BookingRepository>,
    aggregator: Arc<Aggregator>,
}

impl BookingService {
    pub fn new(booking_repo: Arc<dyn BookingRepository>, aggregator: Arc<Aggregator>) -> Self {
        Self {
            booking_repo,
            aggregator,
        }
    }

    /// The session user's bookings with their activities, in listing order.
    ///
    /// Failing to list the bookings fails the call; failing to load an
    /// individual activity leaves that entry unresolved.
    pub async fn my_bookings(&self, session: &Session) -> AppResult<Vec<EnrichedBooking>> {
        let bookings = self.booking_repo.list_for_user(session.user_id()).await?;
        log_debug!(
            "User {} has {} bookings",
            session.user_id(),
            bookings.len()
        );
        Ok(self.aggregator.enrich_with_activity_ordered(bookings).await)
    }

    pub async fn book(
        &self,
        session: &Session,
        activity_id: ActivityId,
        notes: Option<String>,
    ) -> AppResult<Booking> {
        let booking = NewBooking::new(session, activity_id, notes);
        booking.validate()?;

        let created = self.booking_repo.create(&booking).await?;
        log_info!(
            "User {} booked activity {} (booking {})",
            session.user_id(),
            activity_id,
            created.id
        );
        Ok(created)
    }

    pub async fn cancel(&self, booking_id: BookingId) -> AppResult<()> {
        Validator::validate_id("Booking", booking_id)?;
        self.booking_repo.cancel(booking_id).await?;
        log_info!("Cancelled booking {}", booking_id);
        Ok(())
    }
}
