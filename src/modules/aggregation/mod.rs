pub mod aggregator;
pub mod view_models;

pub use aggregator::Aggregator;
pub use view_models::{EnrichedActivity, EnrichedBooking};
