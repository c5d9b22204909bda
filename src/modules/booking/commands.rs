use super::application::service::BookingService;
use super::domain::Booking;
use crate::modules::aggregation::EnrichedBooking;
use crate::shared::domain::{ActivityId, BookingId, Session};
use crate::shared::utils::LogContext;

use serde::{Deserialize, Serialize};

/// Free-text input on the booking form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingForm {
    #[serde(default)]
    pub notes: String,
}

impl BookingForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelBookingRequest {
    pub booking_id: BookingId,
}

pub async fn get_my_bookings(
    session: &Session,
    booking_service: &BookingService,
) -> Result<Vec<EnrichedBooking>, String> {
    booking_service
        .my_bookings(session)
        .await
        .map_err(|e| e.to_string())
}

/// Book `activity_id` for the session user. The form keeps its contents on
/// failure so the user can retry, and is cleared once the booking exists.
pub async fn book_activity(
    session: &Session,
    activity_id: ActivityId,
    form: &mut BookingForm,
    booking_service: &BookingService,
) -> Result<Booking, String> {
    let notes = Some(form.notes.clone());
    let booking = booking_service
        .book(session, activity_id, notes)
        .await
        .map_err(|e| {
            LogContext::error_with_context(&e, "book_activity failed");
            e.user_message("Booking failed. Please try again.")
        })?;

    form.reset();
    Ok(booking)
}

pub async fn cancel_booking(
    request: CancelBookingRequest,
    booking_service: &BookingService,
) -> Result<(), String> {
    booking_service
        .cancel(request.booking_id)
        .await
        .map_err(|e| {
            LogContext::error_with_context(&e, "cancel_booking failed");
            e.user_message("Could not cancel the booking. Please try again.")
        })
}
