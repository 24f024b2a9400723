use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::card::errors::CardError;
use crate::domain::card::repository::CardRepository;
use crate::domain::card::use_cases::update_price::{UpdateCardPriceParams, UpdateCardPriceUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct UpdateCardPriceUseCaseImpl {
    pub repository: Arc<dyn CardRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCardPriceUseCase for UpdateCardPriceUseCaseImpl {
    async fn execute(&self, params: UpdateCardPriceParams) -> Result<(), CardError> {
        if params.price < 0.0 {
            return Err(CardError::NegativePrice);
        }

        self.logger
            .info(&format!("Updating price of card {} to {}", params.id, params.price));

        self.repository
            .update_price(params.id, params.price)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CardError::NotFound,
                other => CardError::Repository(other),
            })?;

        Ok(())
    }
}
