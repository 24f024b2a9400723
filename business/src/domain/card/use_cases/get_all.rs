use async_trait::async_trait;

use crate::domain::card::errors::CardError;
use crate::domain::card::model::Card;

#[async_trait]
pub trait GetAllCardsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Card>, CardError>;
}
