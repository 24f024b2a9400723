use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::CardError;

#[derive(Debug, Clone)]
pub struct Card {
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

pub struct NewCardProps {
    pub name: String,
    pub image_url: Option<String>,
    pub price: Option<f64>,
    pub rarity: String,
    pub set_num: String,
    pub color: String,
}

impl Card {
    pub fn new(props: NewCardProps) -> Result<Self, CardError> {
        if props.name.trim().is_empty() {
            return Err(CardError::NameEmpty);
        }

        if let Some(price) = props.price
            && price < 0.0
        {
            return Err(CardError::NegativePrice);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: props.name,
            image_url: props.image_url,
            price: props.price,
            rarity: props.rarity,
            set_num: props.set_num,
            color: props.color,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        name: String,
        image_url: Option<String>,
        price: Option<f64>,
        rarity: String,
        set_num: String,
        color: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            image_url,
            price,
            rarity,
            set_num,
            color,
            created_at,
            updated_at,
        }
    }

}
