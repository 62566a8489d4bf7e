use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::{entities::SearchOutcome, value_objects::SearchIngredientInput},
};

/// Service trait for the ingredient search pipeline
#[cfg_attr(test, mockall::automock)]
pub trait IngredientService: Send + Sync {
    fn search_ingredient(
        &self,
        input: SearchIngredientInput,
    ) -> impl Future<Output = Result<SearchOutcome, CoreError>> + Send;
}
