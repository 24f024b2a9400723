use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Card;

#[async_trait]
pub trait CardRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Card>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Card, RepositoryError>;
    /// Case-insensitive substring match over name, set number and rarity.
    async fn search(&self, query: &str, limit: i64) -> Result<Vec<Card>, RepositoryError>;
    async fn update_price(&self, id: Uuid, price: f64) -> Result<(), RepositoryError>;
    /// Bulk-overwrites the price of every card with the given rarity.
    /// Returns the number of cards updated.
    async fn update_price_by_rarity(
        &self,
        rarity: &str,
        price: f64,
    ) -> Result<u64, RepositoryError>;
}
