use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::card::model::Card;

/// Unit price used when a card is added to the cart without a shop price.
pub const FALLBACK_UNIT_PRICE: f64 = 3.99;

/// One cart entry for a distinct catalog card.
///
/// Display fields and the unit price are copied at add-time and never
/// re-synced with the catalog. This struct is the durable cart
/// representation: the persisted record is the serialized item array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: Uuid,
    pub name: String,
    pub image_url: Option<String>,
    pub unit_price: f64,
    pub quantity: i64,
    pub premium_packaging: bool,
}

impl LineItem {
    pub fn from_card(card: &Card) -> Self {
        Self {
            id: card.id,
            name: card.name.clone(),
            image_url: card.image_url.clone(),
            unit_price: card.price.unwrap_or(FALLBACK_UNIT_PRICE),
            quantity: 1,
            premium_packaging: false,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}
