pub mod entities;
pub mod repositories;

pub use entities::{NewSubscription, NewUser, Subscription, User};
pub use repositories::UserRepository;
