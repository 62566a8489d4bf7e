use axum::extract::{Query, State};
use heuksal_core::domain::ingredient::{
    entities::SearchOutcome, ports::IngredientService, value_objects::SearchIngredientInput,
};
use validator::Validate;

use crate::application::http::{
    ingredient::validators::{EMPTY_QUERY_MESSAGE, SearchIngredientParams},
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/search",
    tag = "ingredients",
    summary = "Search an ingredient",
    description = "Aggregate nutrition, regulatory notes and hazard analysis for an ingredient. Returns a single object, or an array when the nutrition provider matched several foods.",
    params(SearchIngredientParams),
    responses(
        (status = 200, body = SearchOutcome),
        (status = 400, body = ApiErrorResponse)
    )
)]
pub async fn search_ingredient(
    State(state): State<AppState>,
    Query(params): Query<SearchIngredientParams>,
) -> Result<Response<SearchOutcome>, ApiError> {
    params
        .validate()
        .map_err(|_| ApiError::BadRequest(EMPTY_QUERY_MESSAGE.to_string()))?;

    let outcome = state
        .service
        .search_ingredient(SearchIngredientInput {
            query: params.query,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(outcome))
}
