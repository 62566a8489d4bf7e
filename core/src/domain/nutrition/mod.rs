pub mod entities;
pub mod fallback;
pub mod ports;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
