use std::fmt;

use serde::{Serialize, Serializer};

pub const FDC_ID_UNAVAILABLE: &str = "N/A";

/// FoodData Central identifier, `"N/A"` on the wire when the provider omits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FdcId {
    Known(u64),
    Unavailable,
}

impl From<Option<u64>> for FdcId {
    fn from(value: Option<u64>) -> Self {
        value.map_or(FdcId::Unavailable, FdcId::Known)
    }
}

impl fmt::Display for FdcId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FdcId::Known(id) => write!(f, "{id}"),
            FdcId::Unavailable => f.write_str(FDC_ID_UNAVAILABLE),
        }
    }
}

impl Serialize for FdcId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            FdcId::Known(id) => serializer.serialize_u64(*id),
            FdcId::Unavailable => serializer.serialize_str(FDC_ID_UNAVAILABLE),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Nutrient {
    pub name: String,
    pub value: f64,
    pub unit: String,
}

impl Nutrient {
    pub fn new(name: impl Into<String>, value: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            unit: unit.into(),
        }
    }
}

/// One food record as returned by the nutrition provider (or synthesized for it).
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderNutritionRecord {
    pub fdc_id: FdcId,
    pub description: String,
    pub food_category: Option<String>,
    pub nutrients: Vec<Nutrient>,
}
