use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::card::errors::CardError;
use crate::domain::card::model::Card;
use crate::domain::card::repository::CardRepository;
use crate::domain::card::use_cases::search::{SearchCardsParams, SearchCardsUseCase};
use crate::domain::logger::Logger;

/// Cap on search results, matching the storefront's result page size.
const SEARCH_RESULT_LIMIT: i64 = 50;

pub struct SearchCardsUseCaseImpl {
    pub repository: Arc<dyn CardRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchCardsUseCase for SearchCardsUseCaseImpl {
    async fn execute(&self, params: SearchCardsParams) -> Result<Vec<Card>, CardError> {
        let query = params.query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        self.logger.info(&format!("Searching cards: {}", query));
        let cards = self.repository.search(query, SEARCH_RESULT_LIMIT).await?;
        self.logger
            .info(&format!("Search '{}' matched {} cards", query, cards.len()));
        Ok(cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub CardRepo {}

        #[async_trait]
        impl CardRepository for CardRepo {
            async fn get_all(&self) -> Result<Vec<Card>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Card, RepositoryError>;
            async fn search(&self, query: &str, limit: i64) -> Result<Vec<Card>, RepositoryError>;
            async fn update_price(&self, id: Uuid, price: f64) -> Result<(), RepositoryError>;
            async fn update_price_by_rarity(&self, rarity: &str, price: f64) -> Result<u64, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn test_card(name: &str, rarity: &str) -> Card {
        Card::from_repository(
            Uuid::new_v4(),
            name.to_string(),
            None,
            Some(4.99),
            rarity.to_string(),
            "1".to_string(),
            "Sapphire".to_string(),
            chrono::Utc::now(),
            chrono::Utc::now(),
        )
    }

    #[tokio::test]
    async fn should_search_with_trimmed_query_and_limit() {
        let mut mock_repo = MockCardRepo::new();
        mock_repo
            .expect_search()
            .withf(|query, limit| query == "elsa" && *limit == SEARCH_RESULT_LIMIT)
            .returning(|_, _| Ok(vec![test_card("Elsa - Snow Queen", "Legendary")]));

        let use_case = SearchCardsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SearchCardsParams {
                query: "  elsa  ".to_string(),
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_return_empty_without_repository_call_when_query_empty() {
        let mock_repo = MockCardRepo::new();

        let use_case = SearchCardsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SearchCardsParams {
                query: "   ".to_string(),
            })
            .await;

        assert!(result.is_ok());
        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_pass_through_repository_error() {
        let mut mock_repo = MockCardRepo::new();
        mock_repo
            .expect_search()
            .returning(|_, _| Err(RepositoryError::DatabaseError));

        let use_case = SearchCardsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SearchCardsParams {
                query: "rare".to_string(),
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), CardError::Repository(_)));
    }
}
