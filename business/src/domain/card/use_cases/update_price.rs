use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::card::errors::CardError;

pub struct UpdateCardPriceParams {
    pub id: Uuid,
    pub price: f64,
}

#[async_trait]
pub trait UpdateCardPriceUseCase: Send + Sync {
    async fn execute(&self, params: UpdateCardPriceParams) -> Result<(), CardError>;
}
