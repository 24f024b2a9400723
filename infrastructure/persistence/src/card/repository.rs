use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::card::model::Card;
use business::domain::card::repository::CardRepository;
use business::domain::errors::RepositoryError;

use super::entity::CardEntity;

pub struct CardRepositoryPostgres {
    pool: PgPool,
}

impl CardRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CardRepository for CardRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Card>, RepositoryError> {
        let entities = sqlx::query_as::<_, CardEntity>(
            "SELECT id, name, image_url, price, rarity, set_num, color, created_at, updated_at FROM cards ORDER BY set_num, name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Card, RepositoryError> {
        let entity = sqlx::query_as::<_, CardEntity>(
            "SELECT id, name, image_url, price, rarity, set_num, color, created_at, updated_at FROM cards WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn search(&self, query: &str, limit: i64) -> Result<Vec<Card>, RepositoryError> {
        let pattern = format!("%{}%", query);
        let entities = sqlx::query_as::<_, CardEntity>(
            "SELECT id, name, image_url, price, rarity, set_num, color, created_at, updated_at FROM cards \
             WHERE name ILIKE $1 OR set_num ILIKE $1 OR rarity ILIKE $1 \
             ORDER BY set_num, name LIMIT $2",
        )
        .bind(&pattern)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn update_price(&self, id: Uuid, price: f64) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE cards SET price = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(price)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn update_price_by_rarity(
        &self,
        rarity: &str,
        price: f64,
    ) -> Result<u64, RepositoryError> {
        let result =
            sqlx::query("UPDATE cards SET price = $2, updated_at = NOW() WHERE rarity = $1")
                .bind(rarity)
                .bind(price)
                .execute(&self.pool)
                .await
                .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(result.rows_affected())
    }
}
