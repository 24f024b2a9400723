use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::pricing::errors::PricingError;
use crate::domain::pricing::model::{NewPricingSettingsProps, PricingSettings};
use crate::domain::pricing::repository::PricingSettingsRepository;
use crate::domain::pricing::use_cases::update_settings::{
    UpdatePricingSettingsParams, UpdatePricingSettingsUseCase,
};

pub struct UpdatePricingSettingsUseCaseImpl {
    pub repository: Arc<dyn PricingSettingsRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdatePricingSettingsUseCase for UpdatePricingSettingsUseCaseImpl {
    async fn execute(
        &self,
        params: UpdatePricingSettingsParams,
    ) -> Result<PricingSettings, PricingError> {
        self.logger.info("Updating pricing settings");

        let settings = PricingSettings::new(NewPricingSettingsProps {
            premium_pack_price: params.premium_pack_price,
            shipping_prices: params.shipping_prices,
            rarity_prices: params.rarity_prices,
        })?;

        self.repository.save(&settings).await?;

        self.logger.info("Pricing settings updated");
        Ok(settings)
    }
}
