pub mod service;

pub use service::VolunteerService;
