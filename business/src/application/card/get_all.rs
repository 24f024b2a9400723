use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::card::errors::CardError;
use crate::domain::card::model::Card;
use crate::domain::card::repository::CardRepository;
use crate::domain::card::use_cases::get_all::GetAllCardsUseCase;
use crate::domain::logger::Logger;

pub struct GetAllCardsUseCaseImpl {
    pub repository: Arc<dyn CardRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllCardsUseCase for GetAllCardsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Card>, CardError> {
        self.logger.info("Fetching all cards");
        let cards = self.repository.get_all().await?;
        self.logger.info(&format!("Found {} cards", cards.len()));
        Ok(cards)
    }
}
