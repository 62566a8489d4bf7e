use super::handlers::search_ingredient::{__path_search_ingredient, search_ingredient};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(search_ingredient))]
pub struct IngredientApiDoc;

pub fn ingredient_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api/v1/ingredients/search", state.args.server.root_path),
        get(search_ingredient),
    )
}
