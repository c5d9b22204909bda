pub mod application;
pub mod commands;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::UserService;
pub use domain::{NewSubscription, NewUser, Subscription, User, UserRepository};
pub use infrastructure::HttpUserRepository;
