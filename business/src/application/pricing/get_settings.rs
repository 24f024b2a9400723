use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::pricing::errors::PricingError;
use crate::domain::pricing::model::PricingSettings;
use crate::domain::pricing::repository::PricingSettingsRepository;
use crate::domain::pricing::use_cases::get_settings::GetPricingSettingsUseCase;

pub struct GetPricingSettingsUseCaseImpl {
    pub repository: Arc<dyn PricingSettingsRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetPricingSettingsUseCase for GetPricingSettingsUseCaseImpl {
    async fn execute(&self) -> Result<PricingSettings, PricingError> {
        self.logger.info("Fetching pricing settings");
        let settings = self.repository.get().await?.ok_or(PricingError::NotFound)?;
        Ok(settings)
    }
}
