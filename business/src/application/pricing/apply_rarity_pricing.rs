use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::card::repository::CardRepository;
use crate::domain::logger::Logger;
use crate::domain::pricing::errors::PricingError;
use crate::domain::pricing::use_cases::apply_rarity_pricing::{
    ApplyRarityPricingParams, ApplyRarityPricingUseCase,
};

pub struct ApplyRarityPricingUseCaseImpl {
    pub card_repository: Arc<dyn CardRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ApplyRarityPricingUseCase for ApplyRarityPricingUseCaseImpl {
    async fn execute(&self, params: ApplyRarityPricingParams) -> Result<u64, PricingError> {
        if params.rarity_prices.values().any(|price| *price < 0.0) {
            return Err(PricingError::NegativeAmount);
        }

        let mut updated = 0;
        for (rarity, price) in &params.rarity_prices {
            let count = self
                .card_repository
                .update_price_by_rarity(rarity, *price)
                .await?;
            self.logger
                .info(&format!("Applied price {} to {} '{}' cards", price, count, rarity));
            updated += count;
        }

        self.logger
            .info(&format!("Rarity pricing applied to {} cards", updated));
        Ok(updated)
    }
}
