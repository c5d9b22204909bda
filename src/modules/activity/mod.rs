pub mod application;
pub mod commands;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::{ActivityDetail, ActivityService, HomeView};
pub use domain::{Activity, ActivityFilter, ActivityRepository, NewActivity};
pub use infrastructure::HttpActivityRepository;
