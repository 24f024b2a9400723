use std::collections::HashMap;

use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::pricing::model::PricingSettings;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct PricingSettingsResponse {
    /// Premium packaging surcharge per unit
    pub premium_pack_price: f64,
    /// Shipping cost by region name
    pub shipping_prices: HashMap<String, f64>,
    /// Default card price by rarity name
    pub rarity_prices: HashMap<String, f64>,
    /// Last settings update timestamp
    pub last_updated: DateTime<Utc>,
}

impl From<PricingSettings> for PricingSettingsResponse {
    fn from(settings: PricingSettings) -> Self {
        Self {
            premium_pack_price: settings.premium_pack_price,
            shipping_prices: settings.shipping_prices,
            rarity_prices: settings.rarity_prices,
            last_updated: settings.last_updated,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UpdatePricingSettingsRequest {
    /// Premium packaging surcharge per unit (non-negative)
    pub premium_pack_price: f64,
    /// Shipping cost by region name (non-negative values)
    pub shipping_prices: HashMap<String, f64>,
    /// Default card price by rarity name (non-negative values)
    pub rarity_prices: HashMap<String, f64>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ApplyRarityPricingRequest {
    /// Price to apply per rarity name (non-negative values)
    pub rarity_prices: HashMap<String, f64>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ApplyRarityPricingResponse {
    pub success: bool,
    pub message: String,
    /// Number of cards whose price was overwritten
    pub updated_count: u64,
}
