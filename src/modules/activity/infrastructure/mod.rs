pub mod dto;
pub mod http_activity_repository;

pub use http_activity_repository::HttpActivityRepository;
