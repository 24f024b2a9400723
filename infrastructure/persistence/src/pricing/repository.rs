use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;

use business::domain::errors::RepositoryError;
use business::domain::pricing::model::PricingSettings;
use business::domain::pricing::repository::PricingSettingsRepository;

use super::entity::PricingSettingsEntity;

/// Stores the shop-wide settings as a single row; the check constraint on
/// the table keeps it that way.
pub struct PricingSettingsRepositoryPostgres {
    pool: PgPool,
}

impl PricingSettingsRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PricingSettingsRepository for PricingSettingsRepositoryPostgres {
    async fn get(&self) -> Result<Option<PricingSettings>, RepositoryError> {
        let entity = sqlx::query_as::<_, PricingSettingsEntity>(
            "SELECT premium_pack_price, shipping_prices, rarity_prices, last_updated FROM pricing_settings WHERE id = 1",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn save(&self, settings: &PricingSettings) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO pricing_settings (id, premium_pack_price, shipping_prices, rarity_prices, last_updated)
            VALUES (1, $1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE SET
                premium_pack_price = EXCLUDED.premium_pack_price,
                shipping_prices = EXCLUDED.shipping_prices,
                rarity_prices = EXCLUDED.rarity_prices,
                last_updated = EXCLUDED.last_updated"#,
        )
        .bind(settings.premium_pack_price)
        .bind(Json(&settings.shipping_prices))
        .bind(Json(&settings.rarity_prices))
        .bind(settings.last_updated)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
