/// Identifiers are assigned by the activity service and are plain integers on
/// the wire.
pub type ActivityId = i64;
pub type BookingId = i64;
pub type UserId = i64;
pub type VolunteerId = i64;
pub type SubscriptionId = i64;
