use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

pub const EMPTY_QUERY_MESSAGE: &str = "검색어를 입력해주세요.";

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema, Validate)]
#[into_params(parameter_in = Query)]
pub struct SearchIngredientParams {
    /// Ingredient name in Korean, Japanese or English.
    #[schema(example = "사과")]
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub query: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(query: &str) -> SearchIngredientParams {
        SearchIngredientParams {
            query: query.to_string(),
        }
    }

    #[test]
    fn test_blank_queries_are_rejected() {
        assert!(params("").validate().is_err());
        assert!(params("  \t").validate().is_err());
        assert!(params("사과").validate().is_ok());
        assert!(params(" beef ").validate().is_ok());
    }
}
