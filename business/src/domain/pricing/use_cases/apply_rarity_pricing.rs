use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::pricing::errors::PricingError;

pub struct ApplyRarityPricingParams {
    pub rarity_prices: HashMap<String, f64>,
}

#[async_trait]
pub trait ApplyRarityPricingUseCase: Send + Sync {
    /// Overwrites catalog prices by rarity. Returns the number of cards updated.
    async fn execute(&self, params: ApplyRarityPricingParams) -> Result<u64, PricingError>;
}
