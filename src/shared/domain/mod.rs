pub mod session;
pub mod value_objects;

pub use session::Session;
pub use value_objects::*;
