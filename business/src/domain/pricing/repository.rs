use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::PricingSettings;

#[async_trait]
pub trait PricingSettingsRepository: Send + Sync {
    /// Returns the settings document, or `None` when it was never seeded.
    async fn get(&self) -> Result<Option<PricingSettings>, RepositoryError>;
    /// Full overwrite of the single settings document.
    async fn save(&self, settings: &PricingSettings) -> Result<(), RepositoryError>;

    /// Seeds the default settings when no document exists yet.
    async fn ensure_defaults(&self) -> Result<(), RepositoryError> {
        if self.get().await?.is_none() {
            self.save(&PricingSettings::defaults()).await?;
        }
        Ok(())
    }
}
