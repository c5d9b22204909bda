pub mod entities;
pub mod repositories;

pub use entities::{NewVolunteerApplication, VolunteerApplication, VolunteerContact};
pub use repositories::VolunteerRepository;
