pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::{Activity, NewActivity};
pub use repositories::ActivityRepository;
pub use value_objects::ActivityFilter;
