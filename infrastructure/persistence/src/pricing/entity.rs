use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use sqlx::types::Json;

use business::domain::pricing::model::PricingSettings;

#[derive(Debug, FromRow)]
pub struct PricingSettingsEntity {
    pub premium_pack_price: f64,
    pub shipping_prices: Json<HashMap<String, f64>>,
    pub rarity_prices: Json<HashMap<String, f64>>,
    pub last_updated: DateTime<Utc>,
}

impl PricingSettingsEntity {
    pub fn into_domain(self) -> PricingSettings {
        PricingSettings::from_repository(
            self.premium_pack_price,
            self.shipping_prices.0,
            self.rarity_prices.0,
            self.last_updated,
        )
    }
}
