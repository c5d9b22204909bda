pub mod http_user_repository;

pub use http_user_repository::HttpUserRepository;
