use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::card::errors::CardError;
use crate::domain::card::model::Card;

pub struct GetCardByIdParams {
    pub id: Uuid,
}

#[async_trait]
pub trait GetCardByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetCardByIdParams) -> Result<Card, CardError>;
}
