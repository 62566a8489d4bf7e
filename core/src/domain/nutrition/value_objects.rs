use tracing::{info, warn};

use crate::domain::{
    common::entities::app_errors::CoreError,
    nutrition::{entities::ProviderNutritionRecord, fallback::generate_fallback},
};

/// Page size requested from the nutrition provider, and the cap on kept records.
pub const PRIMARY_PAGE_SIZE: u32 = 5;

/// Nutrients shown per result.
pub const MAX_NUTRIENTS: usize = 9;

/// Where the nutrition records of a search came from.
#[derive(Debug, Clone, PartialEq)]
pub enum NutritionLookup {
    Live(Vec<ProviderNutritionRecord>),
    Fallback(ProviderNutritionRecord),
}

impl NutritionLookup {
    /// Fail-open resolution of a provider answer.
    ///
    /// An error or an empty page both degrade to fallback data for `canonical`;
    /// neither is reported to the caller.
    pub fn resolve(
        canonical: &str,
        answer: Result<Vec<ProviderNutritionRecord>, CoreError>,
    ) -> Self {
        match answer {
            Ok(mut records) if !records.is_empty() => {
                records.truncate(PRIMARY_PAGE_SIZE as usize);
                NutritionLookup::Live(records)
            }
            Ok(_) => {
                info!(query = canonical, "nutrition provider returned no foods, using fallback data");
                NutritionLookup::Fallback(generate_fallback(canonical))
            }
            Err(e) => {
                warn!(query = canonical, error = %e, "nutrition provider failed, using fallback data");
                NutritionLookup::Fallback(generate_fallback(canonical))
            }
        }
    }
}
