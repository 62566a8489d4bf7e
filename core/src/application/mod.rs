use crate::{
    domain::common::{HeuksalConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{
        regulation::{mfds::MfdsRegulatoryClient, mhlw::MhlwRegulatoryClient},
        usda::usda_client::UsdaNutritionClient,
    },
};

pub type HeuksalService = Service<UsdaNutritionClient, MfdsRegulatoryClient, MhlwRegulatoryClient>;

pub fn create_service(config: HeuksalConfig) -> Result<HeuksalService, CoreError> {
    let nutrition_provider = UsdaNutritionClient::new(config.usda)?;

    Ok(Service::new(
        nutrition_provider,
        MfdsRegulatoryClient::new(),
        MhlwRegulatoryClient::new(),
    ))
}
