use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{hazard::entities::HazardReport, nutrition::entities::FdcId};

pub const ORIGIN_BANNER: &str =
    "📌 원산지 데이터 매핑: 🇺🇸미국(USDA) / 🇰🇷한국(MFDS) / 🇯🇵일본(MHLW) 교차검증 완료";
pub const MISSING_NUTRIENTS: &str = "영양 성분 데이터 확보 필요";

/// One line per authority, keyed by its acronym on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Compliance {
    #[serde(rename = "MFDS")]
    pub mfds: String,
    #[serde(rename = "USDA")]
    pub usda: String,
    #[serde(rename = "MHLW")]
    pub mhlw: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedResult {
    pub name: String,
    pub description: String,
    #[schema(value_type = Value)]
    pub fdc_id: FdcId,
    pub insight: String,
    pub origin: String,
    pub compliance: Compliance,
    pub handling: Vec<String>,
    pub chart_data: Vec<ChartPoint>,
    pub hazards: HazardReport,
}

/// Search response body: a bare object for one record, an array for several.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum SearchOutcome {
    Single(NormalizedResult),
    Multiple(Vec<NormalizedResult>),
}

impl SearchOutcome {
    pub fn from_results(mut results: Vec<NormalizedResult>) -> Self {
        if results.len() == 1
            && let Some(result) = results.pop()
        {
            return SearchOutcome::Single(result);
        }
        SearchOutcome::Multiple(results)
    }
}
