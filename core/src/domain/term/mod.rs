pub mod dictionary;
pub mod services;
pub mod value_objects;

pub use services::{to_canonical, to_localized};
pub use value_objects::OriginHint;
