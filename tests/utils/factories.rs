/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use chrono::{TimeZone, Utc};
use one8_lib::modules::activity::Activity;
use one8_lib::modules::booking::Booking;
use one8_lib::shared::domain::{ActivityId, BookingId, UserId};

pub struct ActivityFactory {
    id: ActivityId,
    title: String,
    category: String,
    location: String,
    max_participants: Option<u32>,
}

impl ActivityFactory {
    pub fn new(id: ActivityId) -> Self {
        Self {
            id,
            title: format!("Activity {}", id),
            category: "도예/공예".to_string(),
            location: "Seoul".to_string(),
            max_participants: Some(10),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    pub fn location(mut self, location: &str) -> Self {
        self.location = location.to_string();
        self
    }

    pub fn capacity(mut self, max_participants: u32) -> Self {
        self.max_participants = Some(max_participants);
        self
    }

    pub fn build(self) -> Activity {
        Activity {
            id: self.id,
            title: self.title,
            description: Some("Small group class for beginners".to_string()),
            category: self.category,
            location: self.location,
            instructor: None,
            activity_date: Some(Utc.with_ymd_and_hms(2025, 4, 1, 10, 0, 0).unwrap()),
            max_participants: self.max_participants,
            duration_minutes: Some(90),
            price: None,
            image_url: None,
            created_at: None,
        }
    }
}

pub struct BookingFactory {
    id: BookingId,
    user_id: UserId,
    activity_id: ActivityId,
    notes: Option<String>,
}

impl BookingFactory {
    pub fn new(id: BookingId, activity_id: ActivityId) -> Self {
        Self {
            id,
            user_id: 1,
            activity_id,
            notes: None,
        }
    }

    pub fn user(mut self, user_id: UserId) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }

    pub fn build(self) -> Booking {
        Booking {
            id: self.id,
            user_id: self.user_id,
            activity_id: self.activity_id,
            booking_date: Utc.with_ymd_and_hms(2025, 3, 2, 8, 0, 0).unwrap(),
            notes: self.notes,
        }
    }
}
