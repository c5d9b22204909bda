pub mod http_volunteer_repository;

pub use http_volunteer_repository::HttpVolunteerRepository;
