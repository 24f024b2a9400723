use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::card::model::Card;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CardResponse {
    /// Card unique identifier
    pub id: String,
    /// Card name
    pub name: String,
    /// Card image reference
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    /// Current shop price; absent when the card was never priced
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<f64>,
    /// Rarity tier
    pub rarity: String,
    /// Set identifier
    pub set_num: String,
    /// Ink color
    pub color: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Card> for CardResponse {
    fn from(card: Card) -> Self {
        Self {
            id: card.id.to_string(),
            name: card.name,
            image_url: card.image_url,
            price: card.price,
            rarity: card.rarity,
            set_num: card.set_num,
            color: card.color,
            created_at: card.created_at,
            updated_at: card.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct UpdateCardPriceRequest {
    /// New price (non-negative)
    pub price: f64,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateCardPriceResponse {
    pub success: bool,
    pub message: String,
}
