pub mod http_booking_repository;

pub use http_booking_repository::HttpBookingRepository;
