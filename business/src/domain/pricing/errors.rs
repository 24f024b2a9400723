#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error("pricing.negative_amount")]
    NegativeAmount,
    #[error("pricing.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
