use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, nutrition::entities::ProviderNutritionRecord,
};

/// Live nutrition data source searched with the canonical English term.
#[cfg_attr(test, mockall::automock)]
pub trait NutritionProvider: Send + Sync {
    fn search_foods(
        &self,
        query: String,
        page_size: u32,
    ) -> impl Future<Output = Result<Vec<ProviderNutritionRecord>, CoreError>> + Send;
}
