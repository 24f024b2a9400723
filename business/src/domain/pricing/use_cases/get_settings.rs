use async_trait::async_trait;

use crate::domain::pricing::errors::PricingError;
use crate::domain::pricing::model::PricingSettings;

#[async_trait]
pub trait GetPricingSettingsUseCase: Send + Sync {
    async fn execute(&self) -> Result<PricingSettings, PricingError>;
}
