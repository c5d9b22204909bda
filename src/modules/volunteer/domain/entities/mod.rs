pub mod volunteer_application;

pub use volunteer_application::{NewVolunteerApplication, VolunteerApplication, VolunteerContact};
