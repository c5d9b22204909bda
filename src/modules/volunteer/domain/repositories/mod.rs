mod volunteer_repository;

pub use volunteer_repository::*;
