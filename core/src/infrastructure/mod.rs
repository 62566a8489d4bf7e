pub mod regulation;
pub mod usda;
