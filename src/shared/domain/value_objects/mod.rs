mod ids;

pub use ids::{ActivityId, BookingId, SubscriptionId, UserId, VolunteerId};
