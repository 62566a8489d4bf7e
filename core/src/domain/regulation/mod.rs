pub mod entities;
pub mod ports;

pub use entities::*;
