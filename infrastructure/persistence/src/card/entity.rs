use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::card::model::Card;

#[derive(Debug, FromRow)]
pub struct CardEntity {
    pub id: Uuid,
    pub name: String,
    pub image_url: Option<String>,
    pub price: Option<f64>,
    pub rarity: String,
    pub set_num: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CardEntity {
    pub fn into_domain(self) -> Card {
        Card::from_repository(
            self.id,
            self.name,
            self.image_url,
            self.price,
            self.rarity,
            self.set_num,
            self.color,
            self.created_at,
            self.updated_at,
        )
    }
}
