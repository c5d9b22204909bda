use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::domain::{ActivityId, BookingId, Session, UserId};
use crate::shared::errors::AppResult;
use crate::shared::utils::{datetime, Validator};

/// A user's reservation of a place in an activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub user_id: UserId,
    pub activity_id: ActivityId,
    #[serde(with = "datetime::flexible")]
    pub booking_date: DateTime<Utc>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Payload for `POST /bookings`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewBooking {
    pub user_id: UserId,
    pub activity_id: ActivityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewBooking {
    /// Blank notes are sent as absent rather than as an empty string
    pub fn new(session: &Session, activity_id: ActivityId, notes: Option<String>) -> Self {
        Self {
            user_id: session.user_id(),
            activity_id,
            notes: notes
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        Validator::validate_id("Activity", self.activity_id)?;
        if let Some(notes) = &self.notes {
            Validator::validate_notes(notes)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_naive_booking_date() {
        let json = r#"{"id": 10, "user_id": 1, "activity_id": 5,
                       "booking_date": "2025-03-02T08:00:00", "notes": null}"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.activity_id, 5);
        assert_eq!(booking.notes, None);
        assert_eq!(booking.booking_date.to_rfc3339(), "2025-03-02T08:00:00+00:00");
    }

    #[test]
    fn test_new_booking_drops_blank_notes() {
        let session = Session::new(1).unwrap();
        let booking = NewBooking::new(&session, 5, Some("   ".to_string()));
        assert_eq!(booking.notes, None);

        let json = serde_json::to_value(&booking).unwrap();
        assert_eq!(json, serde_json::json!({"user_id": 1, "activity_id": 5}));
    }

    #[test]
    fn test_new_booking_keeps_trimmed_notes() {
        let session = Session::new(2).unwrap();
        let booking = NewBooking::new(&session, 5, Some(" wheelchair access ".to_string()));
        assert_eq!(booking.notes.as_deref(), Some("wheelchair access"));
        assert!(booking.validate().is_ok());
    }
}
