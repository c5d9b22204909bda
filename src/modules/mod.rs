pub mod activity;
pub mod aggregation;
pub mod booking;
pub mod user;
pub mod volunteer;
