use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const HAZARD_SOURCES: [&str; 3] = ["CODEX Alimentarius", "FAO/WHO", "NACMCF"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum HazardCategory {
    #[serde(rename = "농산물")]
    Produce,
    #[serde(rename = "축산물")]
    Livestock,
    #[serde(rename = "수산물")]
    Seafood,
    #[serde(rename = "곡류·가공식품")]
    Grain,
    #[serde(rename = "식품첨가물")]
    FoodAdditive,
    #[serde(rename = "향신료")]
    Spice,
    #[serde(rename = "한약재")]
    MedicinalHerb,
}

impl HazardCategory {
    pub const ALL: [HazardCategory; 7] = [
        HazardCategory::Produce,
        HazardCategory::Livestock,
        HazardCategory::Seafood,
        HazardCategory::Grain,
        HazardCategory::FoodAdditive,
        HazardCategory::Spice,
        HazardCategory::MedicinalHerb,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum RiskLevel {
    #[serde(rename = "높음")]
    High,
    #[serde(rename = "중간")]
    Medium,
    #[serde(rename = "낮음")]
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Likelihood {
    #[serde(rename = "매우 낮음")]
    VeryLow,
    #[serde(rename = "낮음")]
    Low,
    #[serde(rename = "중간")]
    Medium,
    #[serde(rename = "높음")]
    High,
}

/// Row of a static hazard table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HazardSpec {
    pub name: &'static str,
    pub risk: RiskLevel,
    pub likelihood: Likelihood,
    pub control: &'static str,
}

impl HazardSpec {
    pub const fn new(
        name: &'static str,
        risk: RiskLevel,
        likelihood: Likelihood,
        control: &'static str,
    ) -> Self {
        Self {
            name,
            risk,
            likelihood,
            control,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HazardEntry {
    pub name: String,
    pub risk: RiskLevel,
    #[serde(rename = "probability")]
    pub likelihood: Likelihood,
    pub control: String,
}

impl From<&HazardSpec> for HazardEntry {
    fn from(spec: &HazardSpec) -> Self {
        Self {
            name: spec.name.to_string(),
            risk: spec.risk,
            likelihood: spec.likelihood,
            control: spec.control.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HazardTables {
    pub microbial: &'static [HazardSpec],
    pub chemical: &'static [HazardSpec],
    pub physical: &'static [HazardSpec],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HazardReport {
    pub category: HazardCategory,
    pub microbial: Vec<HazardEntry>,
    pub chemical: Vec<HazardEntry>,
    pub physical: Vec<HazardEntry>,
    pub sources: Vec<String>,
}
