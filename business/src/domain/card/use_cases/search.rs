use async_trait::async_trait;

use crate::domain::card::errors::CardError;
use crate::domain::card::model::Card;

pub struct SearchCardsParams {
    pub query: String,
}

#[async_trait]
pub trait SearchCardsUseCase: Send + Sync {
    async fn execute(&self, params: SearchCardsParams) -> Result<Vec<Card>, CardError>;
}
