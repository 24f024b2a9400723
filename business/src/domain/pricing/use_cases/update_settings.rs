use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::pricing::errors::PricingError;
use crate::domain::pricing::model::PricingSettings;

pub struct UpdatePricingSettingsParams {
    pub premium_pack_price: f64,
    pub shipping_prices: HashMap<String, f64>,
    pub rarity_prices: HashMap<String, f64>,
}

#[async_trait]
pub trait UpdatePricingSettingsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: UpdatePricingSettingsParams,
    ) -> Result<PricingSettings, PricingError>;
}
