pub mod entities;
pub mod repositories;

pub use entities::{Booking, NewBooking};
pub use repositories::BookingRepository;
