use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::domain::{
    common::{UsdaConfig, entities::app_errors::CoreError},
    nutrition::{
        entities::{FdcId, Nutrient, ProviderNutritionRecord},
        ports::NutritionProvider,
    },
};

/// USDA FoodData Central search client.
#[derive(Debug, Clone)]
pub struct UsdaNutritionClient {
    api_key: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    foods: Vec<FoodItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FoodItem {
    fdc_id: Option<u64>,
    description: Option<String>,
    food_category: Option<String>,
    #[serde(default)]
    food_nutrients: Vec<FoodNutrient>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FoodNutrient {
    nutrient_name: Option<String>,
    value: Option<f64>,
    unit_name: Option<String>,
}

impl From<FoodItem> for ProviderNutritionRecord {
    fn from(item: FoodItem) -> Self {
        Self {
            fdc_id: FdcId::from(item.fdc_id),
            description: item.description.unwrap_or_default(),
            food_category: item.food_category,
            nutrients: item
                .food_nutrients
                .into_iter()
                .map(|n| {
                    Nutrient::new(
                        n.nutrient_name.unwrap_or_default(),
                        n.value.unwrap_or_default(),
                        n.unit_name.unwrap_or_default(),
                    )
                })
                .collect(),
        }
    }
}

impl UsdaNutritionClient {
    pub fn new(config: UsdaConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build USDA http client: {}", e);
                CoreError::ExternalServiceError(format!("USDA client error: {}", e))
            })?;

        Ok(Self {
            api_key: config.api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

impl NutritionProvider for UsdaNutritionClient {
    async fn search_foods(
        &self,
        query: String,
        page_size: u32,
    ) -> Result<Vec<ProviderNutritionRecord>, CoreError> {
        let url = format!("{}/foods/search", self.base_url);
        let page_size = page_size.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("query", query.as_str()),
                ("pageSize", page_size.as_str()),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::error!("USDA API request failed: {}", e);
                CoreError::ExternalServiceError(format!("USDA API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("USDA API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "USDA API returned error: {} - {}",
                status, error_text
            )));
        }

        let search: SearchResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse USDA response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse USDA response: {}", e))
        })?;

        Ok(search
            .foods
            .into_iter()
            .map(ProviderNutritionRecord::from)
            .collect())
    }
}
