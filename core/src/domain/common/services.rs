use std::sync::Arc;

use crate::domain::{nutrition::ports::NutritionProvider, regulation::ports::RegulatoryProvider};

/// Request-scoped pipeline over one nutrition provider and two regulatory providers.
///
/// `K` is the domestic (Korean) authority, `J` the foreign (Japanese) one.
pub struct Service<N, K, J>
where
    N: NutritionProvider,
    K: RegulatoryProvider,
    J: RegulatoryProvider,
{
    pub(crate) nutrition_provider: Arc<N>,
    pub(crate) domestic_regulation: Arc<K>,
    pub(crate) foreign_regulation: Arc<J>,
}

impl<N, K, J> Service<N, K, J>
where
    N: NutritionProvider,
    K: RegulatoryProvider,
    J: RegulatoryProvider,
{
    pub fn new(nutrition_provider: N, domestic_regulation: K, foreign_regulation: J) -> Self {
        Self {
            nutrition_provider: Arc::new(nutrition_provider),
            domestic_regulation: Arc::new(domestic_regulation),
            foreign_regulation: Arc::new(foreign_regulation),
        }
    }
}

impl<N, K, J> Clone for Service<N, K, J>
where
    N: NutritionProvider,
    K: RegulatoryProvider,
    J: RegulatoryProvider,
{
    fn clone(&self) -> Self {
        Self {
            nutrition_provider: Arc::clone(&self.nutrition_provider),
            domestic_regulation: Arc::clone(&self.domestic_regulation),
            foreign_regulation: Arc::clone(&self.foreign_regulation),
        }
    }
}
