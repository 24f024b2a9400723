use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::card::errors::CardError;
use crate::domain::card::model::Card;
use crate::domain::card::repository::CardRepository;
use crate::domain::card::use_cases::get_by_id::{GetCardByIdParams, GetCardByIdUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct GetCardByIdUseCaseImpl {
    pub repository: Arc<dyn CardRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCardByIdUseCase for GetCardByIdUseCaseImpl {
    async fn execute(&self, params: GetCardByIdParams) -> Result<Card, CardError> {
        self.logger.info(&format!("Fetching card: {}", params.id));

        let card = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CardError::NotFound,
                other => CardError::Repository(other),
            })?;

        Ok(card)
    }
}
