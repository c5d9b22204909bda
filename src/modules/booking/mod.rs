pub mod application;
pub mod commands;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::BookingService;
pub use domain::{Booking, BookingRepository, NewBooking};
pub use infrastructure::HttpBookingRepository;
