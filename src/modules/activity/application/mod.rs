pub mod service;

pub use service::{ActivityDetail, ActivityService, HomeView, FEATURED_LIMIT};
