use crate::application::http::{
    health::HealthApiDoc, ingredient::router::IngredientApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Heuksal API",
        description = "Ingredient nutrition, regulation and hazard search"
    ),
    nest(
        (path = "/api/v1/ingredients", api = IngredientApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
