use serde::Serialize;

use crate::modules::activity::Activity;
use crate::modules::booking::Booking;
use crate::shared::application::Lookup;

/// An activity with the number of bookings made for it.
///
/// `booking_count` is 0 both for "nobody booked" and for "the count could not
/// be fetched"; `booking_count_known` tells the two apart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedActivity {
    #[serde(flatten)]
    pub activity: Activity,
    pub booking_count: usize,
    pub booking_count_known: bool,
}

impl EnrichedActivity {
    pub fn new(activity: Activity, booking_count: Lookup<usize>) -> Self {
        Self {
            activity,
            booking_count_known: booking_count.is_resolved(),
            booking_count: booking_count.unwrap_or(0),
        }
    }

    pub fn remaining_capacity(&self) -> Option<u32> {
        if !self.booking_count_known {
            return None;
        }
        self.activity.remaining_capacity(self.booking_count)
    }
}

/// A booking joined with the activity it refers to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedBooking {
    pub booking: Booking,
    pub activity: Lookup<Activity>,
}

impl EnrichedBooking {
    pub fn activity(&self) -> Option<&Activity> {
        match &self.activity {
            Lookup::Resolved(activity) => Some(activity),
            Lookup::Unresolved => None,
        }
    }

    /// Text to show in place of the activity card when it could not be loaded
    pub fn unavailable_message(&self) -> Option<String> {
        if self.activity.is_resolved() {
            return None;
        }
        Some(format!(
            "activity information unavailable, id={}",
            self.booking.activity_id
        ))
    }
}
