pub mod common;
pub mod hazard;
pub mod ingredient;
pub mod nutrition;
pub mod regulation;
pub mod term;
