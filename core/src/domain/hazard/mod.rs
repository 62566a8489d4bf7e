pub mod classifier;
pub mod entities;
pub mod tables;

pub use classifier::{classify, hazard_report, hazards_for};
pub use entities::*;
