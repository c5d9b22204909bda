pub mod application;
pub mod commands;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::VolunteerService;
pub use domain::{
    NewVolunteerApplication, VolunteerApplication, VolunteerContact, VolunteerRepository,
};
pub use infrastructure::HttpVolunteerRepository;
